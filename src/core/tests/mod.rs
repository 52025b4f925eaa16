mod rep;
mod accuracy;
