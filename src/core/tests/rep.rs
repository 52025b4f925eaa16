mod quantities {
    use crate::core::format::NumericFormat;
    use crate::core::rep::*;

    // -------------------------
    // Format descriptors
    // -------------------------

    #[test]
    fn binary32_layout() {
        let f = NumericFormat::BINARY32;
        println!("{f}");

        assert_eq!(f.mant_bits, 23);
        assert_eq!(f.bias, 127);
        assert_eq!(f.sign_mask(), 0x8000_0000);
        assert_eq!(f.inf_pattern(), 0x7F80_0000);
        assert_eq!(f.mant_mask(), 0x007F_FFFF);
        assert_eq!(f.exp_mask(), 0xFF);
        assert_eq!(f.hex_digits(), 6);
        assert_eq!(f.hex_shift(), 1);
        assert_eq!(f.decimal_digits(), 8);
        assert_eq!(f.default_calibration(), 5);
    }

    #[test]
    fn binary64_layout() {
        let f = NumericFormat::BINARY64;
        println!("{f}");

        assert_eq!(f.mant_bits, 52);
        assert_eq!(f.bias, 1023);
        assert_eq!(f.sign_mask(), 0x8000_0000_0000_0000);
        assert_eq!(f.inf_pattern(), 0x7FF0_0000_0000_0000);
        assert_eq!(f.mant_mask(), 0x000F_FFFF_FFFF_FFFF);
        assert_eq!(f.hex_digits(), 13);
        assert_eq!(f.hex_shift(), 0);
        assert_eq!(f.decimal_digits(), 15);
        assert_eq!(f.default_calibration(), 30);
    }

    #[test]
    fn infinity_pattern_matches_std() {
        assert_eq!(NumericFormat::BINARY32.inf_pattern(), f32::INFINITY.to_bits() as u64);
        assert_eq!(NumericFormat::BINARY64.inf_pattern(), f64::INFINITY.to_bits());
    }

    // -------------------------
    // Codec
    // -------------------------

    #[test]
    fn round_trip_keeps_specials_bit_exact() {
        let f32_patterns: &[u32] = &[
            0x0000_0000, // +0
            0x8000_0000, // -0
            0x0000_0001, // min subnormal
            0x7F80_0000, // +inf
            0xFF80_0000, // -inf
            0x7FC0_0000, // quiet NaN
            0x7F80_0001, // signalling NaN payload
            0xFFC1_2345, // negative NaN payload
        ];
        for &bits in f32_patterns {
            let x = f32::from_bits(bits);
            let back: f32 = from_bits(to_bits(x));
            println!("f32 {bits:#010x} -> {:#010x}", back.to_bits());
            assert_eq!(back.to_bits(), bits);
        }

        let f64_patterns: &[u64] = &[
            0x8000_0000_0000_0000,
            0x0000_0000_0000_0001,
            0x7FF0_0000_0000_0001,
            0xFFF8_0000_DEAD_BEEF,
        ];
        for &bits in f64_patterns {
            let back: f64 = from_bits(to_bits(f64::from_bits(bits)));
            assert_eq!(back.to_bits(), bits);
        }
    }

    #[test]
    fn narrow_bits_have_no_upper_half() {
        assert_eq!(to_bits(-1.0f32) >> 32, 0);
        assert_eq!(to_bits(f32::NAN) >> 32, 0);
    }

    #[test]
    fn unpack_fields() {
        let u = Unpacked::of(1.5f32);
        println!("1.5f32 => {u:?}");
        assert!(!u.sign);
        assert_eq!(u.biased_exp, 127);
        assert_eq!(u.mant, 0x40_0000);

        let u = Unpacked::of(-2.0f64);
        println!("-2.0f64 => {u:?}");
        assert!(u.sign);
        assert_eq!(u.biased_exp, 1024);
        assert_eq!(u.mant, 0);

        let sub = f32::from_bits(1);
        assert_eq!(biased_exponent(sub), 0);
        assert_eq!(mantissa(sub), 1);
        assert!(!sign(sub));
        assert!(sign(-0.0f64));
    }

    #[test]
    fn pack_inverts_unpack() {
        for &x in &[0.0f64, -0.0, 1.0, -3.75, f64::MIN_POSITIVE, 5e-324, f64::MAX, f64::INFINITY] {
            let u = Unpacked::of(x);
            assert_eq!(u.pack(&NumericFormat::BINARY64), x.to_bits(), "x = {x:e}");
        }
    }
}

mod properties {
    use crate::core::rep::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn prop_f32_bits_round_trip(bits: u32) {
            let x = f32::from_bits(bits);
            prop_assert_eq!(to_bits(x), bits as u64);
            prop_assert_eq!(from_bits::<f32>(to_bits(x)).to_bits(), bits);
        }

        #[test]
        fn prop_f64_bits_round_trip(bits: u64) {
            let x = f64::from_bits(bits);
            prop_assert_eq!(from_bits::<f64>(to_bits(x)).to_bits(), bits);
        }

        #[test]
        fn prop_unpacked_matches_shifts(bits: u32) {
            let u = Unpacked::of(f32::from_bits(bits));
            prop_assert_eq!(u.sign, bits >> 31 == 1);
            prop_assert_eq!(u.biased_exp, (bits >> 23) & 0xFF);
            prop_assert_eq!(u.mant, (bits & 0x7F_FFFF) as u64);
        }
    }
}
