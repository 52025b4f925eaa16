use std::fmt::Write as _;
use std::io::Write;

use crate::core::rep::AuditFloat;
use crate::error::AuditError;
use crate::sweep::record::Record;

/// Where retained samples go, in sweep order.
pub trait RecordSink<F> {
    fn emit(&mut self, record: &Record<F>) -> Result<(), AuditError>;

    fn finish(&mut self) -> Result<(), AuditError> {
        Ok(())
    }
}

impl<F: Clone> RecordSink<F> for Vec<Record<F>> {
    fn emit(&mut self, record: &Record<F>) -> Result<(), AuditError> {
        self.push(record.clone());
        Ok(())
    }
}

impl<F, S: RecordSink<F> + ?Sized> RecordSink<F> for &mut S {
    fn emit(&mut self, record: &Record<F>) -> Result<(), AuditError> {
        (**self).emit(record)
    }

    fn finish(&mut self) -> Result<(), AuditError> {
        (**self).finish()
    }
}

// ----------------------------------------------------
// printf-compatible number rendering
// ----------------------------------------------------

fn special<F: AuditFloat>(v: F) -> Option<&'static str> {
    if v.is_nan() {
        Some(if v.is_sign_negative() { "-nan" } else { " nan" })
    } else if v.is_infinite() {
        Some(if v.is_sign_negative() { "-inf" } else { " inf" })
    } else {
        None
    }
}

// `% ` flag: blank in front of non-negative values.
fn space_flag(s: String) -> String {
    if s.starts_with('-') { s } else { format!(" {s}") }
}

/// C `% .{prec}f`.
pub fn c_fixed<F: AuditFloat>(v: F, prec: usize) -> String {
    match special(v) {
        Some(s) => s.to_string(),
        None => space_flag(format!("{v:.prec$}")),
    }
}

/// C `% .{prec}e`: signed exponent with at least two digits.
pub fn c_sci<F: AuditFloat>(v: F, prec: usize) -> String {
    if let Some(s) = special(v) {
        return s.to_string();
    }
    let s = format!("{v:.prec$e}");
    let Some((mant, exp)) = s.split_once('e') else {
        return space_flag(s);
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            space_flag(format!("{mant}e{sign}{:02}", e.unsigned_abs()))
        }
        Err(_) => space_flag(s),
    }
}

/// One `::` line without the trailing newline:
///
/// `:: x [y] abs-err rel-err bits # hex-x [hex-y] cycles [!a<] [!a>] [!r<] [!r>] [!t>]`
pub fn render_line<F: AuditFloat>(rec: &Record<F>) -> String {
    let prec = F::FORMAT.decimal_digits();
    let mut line = String::with_capacity(128);

    line.push_str(":: ");
    line.push(' ');
    line.push_str(&c_fixed(rec.point.x, prec));
    if let Some(y) = rec.point.y {
        line.push(' ');
        line.push_str(&c_fixed(y, prec));
    }

    // Writing into a String cannot fail.
    let _ = write!(line, " {} ", c_sci(rec.error.absolute, 4));
    let _ = write!(line, " {} ", c_sci(rec.error.relative, 4));
    let _ = write!(line, " {} # ", c_fixed(rec.error.bits, 2));

    line.push_str(&rec.x_hex);
    if let Some(y_hex) = &rec.y_hex {
        line.push(' ');
        line.push_str(y_hex);
    }
    let _ = write!(line, " {}{}", rec.cycles, rec.flags);
    line
}

/// The classic line-oriented report.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: AuditFloat, W: Write> RecordSink<F> for TextSink<W> {
    fn emit(&mut self, record: &Record<F>) -> Result<(), AuditError> {
        writeln!(self.out, "{}", render_line(record))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AuditError> {
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: AuditFloat, W: Write> RecordSink<F> for JsonLinesSink<W> {
    fn emit(&mut self, record: &Record<F>) -> Result<(), AuditError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AuditError> {
        self.out.flush()?;
        Ok(())
    }
}
