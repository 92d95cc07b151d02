#![no_main]

use fxmath::{
    EXP_MAX, EXP_MIN, EXP2_MAX, EXP2_MIN, Fixed, SCALE, exp, exp2, log, log2, log10, pow, root,
    sqrt,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i128, i128, i64)| {
    let (a, b, n) = data;
    let x = Fixed::from_raw(a);
    let y = Fixed::from_raw(b);

    let in_log_domain = a >= SCALE as i128;
    assert_eq!(log2(&x).is_ok(), in_log_domain);
    assert_eq!(log(&x).is_ok(), in_log_domain);
    assert_eq!(log10(&x).is_ok(), in_log_domain);
    assert_eq!(sqrt(&x).is_ok(), in_log_domain);
    if !in_log_domain || n == 0 {
        assert!(root(&x, n).is_err());
    }
    assert_eq!(exp2(&x).is_ok(), (EXP2_MIN..=EXP2_MAX).contains(&a));
    assert_eq!(exp(&x).is_ok(), (EXP_MIN..=EXP_MAX).contains(&a));

    if let Ok(value) = exp2(&x) {
        assert!(!value.is_negative());
    }
    if let Ok(binary) = log2(&x) {
        let back = exp2(&binary).unwrap();
        let diff = (back.raw() - x.raw()).magnitude().clone();
        assert!(diff <= x.raw().magnitude() >> 50u32);
    }
    _ = pow(&x, &y);
});
