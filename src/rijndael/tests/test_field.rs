use crate::error::RijndaelError;
use crate::rijndael::field::Field;

#[test]
fn multiply_matches_known_aes_product() {
    let f = Field::new(8).unwrap();
    // 0x57 * 0x83 == 0xC1 is the textbook FIPS-197 example.
    assert_eq!(f.multiply(0x57, 0x83), 0xC1);
}

#[test]
fn inverse_round_trips_for_every_nonzero_byte() {
    let f = Field::new(8).unwrap();
    for a in 1u128..256 {
        let inv = f.inverse(a).unwrap();
        assert_eq!(f.multiply(a, inv), 1, "a = {a:#x}");
    }
}

#[test]
fn zero_has_no_inverse() {
    let f = Field::new(8).unwrap();
    assert!(matches!(f.inverse(0), Err(RijndaelError::ZeroInverse)));
}

#[test]
fn divmod_satisfies_division_identity() {
    let f = Field::new(8).unwrap();
    let (q, r) = f.divmod(0b1010_0110, 0b1011).unwrap();
    let reconstructed = f.multiply(q, 0b1011) ^ r;
    assert_eq!(reconstructed, 0b1010_0110);
}

#[test]
fn small_degree_fields_round_trip() {
    for degree in [3u32, 4, 5, 7] {
        let f = Field::new(degree).unwrap();
        for a in 1u128..f.order() {
            let inv = f.inverse(a).unwrap();
            assert_eq!(f.multiply(a, inv), 1, "degree {degree}, a = {a}");
        }
    }
}

#[test]
fn giga_field_inverse_round_trips_on_a_sample() {
    let f = Field::new(32).unwrap();
    for a in [1u128, 2, 3, 0xDEAD_BEEF, 0xFFFF_FFFF, 0x1234_5678] {
        let inv = f.inverse(a).unwrap();
        assert_eq!(f.multiply(a, inv), 1, "a = {a:#x}");
    }
}

#[test]
fn unknown_degree_without_irreducible_errors() {
    assert!(matches!(Field::new(6), Err(RijndaelError::InvalidParameter(_))));
}
