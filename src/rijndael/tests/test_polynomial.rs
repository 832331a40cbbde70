use crate::error::RijndaelError;
use crate::rijndael::field::Field;
use crate::rijndael::polynomial::Polynomial;

#[test]
fn displays_as_expected_polynomial_string() {
    let f = Field::new(8).unwrap();
    // 81 == 0b0101_0001 == x^6 + x^4 + 1
    let p = Polynomial::new(81, f);
    assert_eq!(p.to_string(), "x^6+x^4+1");
}

#[test]
fn zero_displays_as_zero() {
    let f = Field::new(8).unwrap();
    assert_eq!(Polynomial::new(0, f).to_string(), "0");
}

#[test]
fn arithmetic_matches_field_operations() {
    let f = Field::new(8).unwrap();
    let a = Polynomial::new(0x57, f);
    let b = Polynomial::new(0x83, f);
    assert_eq!((a * b).unwrap().value(), 0xC1);
    assert_eq!((a + b).unwrap().value(), f.add(0x57, 0x83));
}

#[test]
fn inverse_round_trips_through_multiplication() {
    let f = Field::new(8).unwrap();
    let a = Polynomial::new(0x53, f);
    let inv = a.inverse().unwrap();
    assert_eq!((a * inv).unwrap().value(), 1);
}

#[test]
fn cross_field_addition_returns_field_mismatch() {
    let f8 = Field::new(8).unwrap();
    let f4 = Field::new(4).unwrap();
    let a = Polynomial::new(1, f8);
    let b = Polynomial::new(1, f4);
    assert_eq!((a + b).unwrap_err(), RijndaelError::FieldMismatch);
}
