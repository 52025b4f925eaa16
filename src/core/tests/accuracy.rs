mod quantities {
    use core::cell::Cell;

    use crate::core::accuracy::*;
    use crate::core::arith::{Arithmetic, Native};

    #[test]
    fn exact_result_scores_the_mantissa_width() {
        println!("bit_accuracy(0f32) = {}", bit_accuracy(0.0f32));
        println!("bit_accuracy(0f64) = {}", bit_accuracy(0.0f64));

        assert_eq!(bit_accuracy(0.0f32), -23.0);
        assert_eq!(bit_accuracy(-0.0f32), -23.0);
        assert_eq!(bit_accuracy(0.0f64), -52.0);
    }

    #[test]
    fn relative_error_with_zero_reference() {
        assert_eq!(relative_error(0.0f32, 0.0), 0.0);
        assert_eq!(relative_error(-0.0f32, 0.0), 0.0);
        assert_eq!(relative_error(0.0f64, -0.0), 0.0);
        assert_eq!(relative_error(5.0f32, 0.0), 1.0);
        // Sign of the target does not matter here.
        assert_eq!(relative_error(-5.0f64, 0.0), 1.0);
        assert_eq!(relative_error(1e-40f32, -0.0), 1.0);
    }

    #[test]
    fn relative_error_is_signed() {
        assert_eq!(relative_error(1.5f64, 1.0), 0.5);
        assert_eq!(relative_error(0.5f64, 1.0), -0.5);
        // |reference| in the denominator keeps the sign of target - reference.
        assert_eq!(relative_error(-1.5f64, -1.0), -0.5);
        assert_eq!(relative_error(-0.5f32, -1.0), 0.5);
    }

    #[test]
    fn absolute_error_is_target_minus_reference() {
        assert_eq!(absolute_error(3.0f32, 1.0), 2.0);
        assert_eq!(absolute_error(1.0f64, 3.0), -2.0);
        assert_eq!(absolute_error(0.1f64, 0.1), 0.0);
    }

    #[test]
    fn bits_follow_one_plus_log2() {
        let cases: &[(f64, f64)] = &[
            (0.5, 0.0),
            (0.25, -1.0),
            (-0.25, -1.0),
            (1.0, 1.0),
            (2.0f64.powi(-24), -23.0),
            (2.0f64.powi(-53), -52.0),
            // Not clamped to the mantissa width.
            (2.0f64.powi(-60), -59.0),
        ];
        for &(rel, bits) in cases {
            let got = bit_accuracy(rel);
            println!("bit_accuracy({rel:e}) = {got}");
            assert_eq!(got, bits);
        }
        assert_eq!(bit_accuracy(2.0f32.powi(-24)), -23.0);
        assert_eq!(bit_accuracy(-(2.0f32.powi(-30))), -29.0);
    }

    #[test]
    fn analyze_bundles_all_three() {
        let r = ErrorAnalyzer::native().analyze(1.0f32 + f32::EPSILON, 1.0);
        println!("{r:?}");
        assert_eq!(r.absolute, f32::EPSILON);
        assert_eq!(r.relative, f32::EPSILON);
        assert_eq!(r.bits, -22.0);

        let r = ErrorAnalyzer::native().analyze(2.0f64, 2.0);
        assert_eq!(r, ErrorRecord { absolute: 0.0, relative: 0.0, bits: -52.0 });

        let r = ErrorAnalyzer::native().analyze(7.0f64, 0.0);
        assert_eq!(r.absolute, 7.0);
        assert_eq!(r.relative, 1.0);
        assert_eq!(r.bits, 1.0);
    }

    // Counts every primitive the analyzer routes through it.
    #[derive(Default)]
    struct Counting {
        ops: Cell<usize>,
    }

    impl Counting {
        fn tick(&self) {
            self.ops.set(self.ops.get() + 1);
        }
    }

    impl Arithmetic<f64> for Counting {
        fn add(&self, a: f64, b: f64) -> f64 { self.tick(); Native.add(a, b) }
        fn sub(&self, a: f64, b: f64) -> f64 { self.tick(); Native.sub(a, b) }
        fn mul(&self, a: f64, b: f64) -> f64 { self.tick(); Native.mul(a, b) }
        fn div(&self, a: f64, b: f64) -> f64 { self.tick(); Native.div(a, b) }
        fn fabs(&self, a: f64) -> f64 { self.tick(); Native.fabs(a) }
        fn log2(&self, a: f64) -> f64 { self.tick(); Native.log2(a) }
    }

    #[test]
    fn analysis_runs_on_the_injected_arithmetic() {
        let analyzer = ErrorAnalyzer::new(Counting::default());
        let r = analyzer.analyze(1.25f64, 1.0);
        println!("{r:?} in {} ops", analyzer.arith().ops.get());

        // sub, fabs, div for the errors; fabs, log2, add for the bits.
        assert_eq!(analyzer.arith().ops.get(), 6);
        assert_eq!(r.relative, 0.25);
        assert_eq!(r.bits, -1.0);
    }

    #[test]
    fn exact_and_zero_reference_paths_skip_the_log() {
        let analyzer = ErrorAnalyzer::new(Counting::default());
        analyzer.analyze(0.0f64, 0.0);
        // Only the subtraction.
        assert_eq!(analyzer.arith().ops.get(), 1);
    }
}
