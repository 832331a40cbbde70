use crate::rijndael::sbox::SBox;

#[test]
fn standard_sbox_round_trips_over_full_domain() {
    let sbox = SBox::standard().unwrap();
    for x in 0u128..256 {
        assert_eq!(sbox.inverse(sbox.forward(x)), x, "x = {x:#x}");
    }
}

#[test]
fn standard_sbox_matches_published_aes_table_head() {
    let sbox = SBox::standard().unwrap();
    let expected_head = [
        0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab,
        0x76,
    ];
    for (x, &expected) in expected_head.iter().enumerate() {
        assert_eq!(sbox.forward(x as u128), expected, "x = {x:#x}");
    }
}

#[test]
fn standard_sbox_zero_maps_to_0x63() {
    let sbox = SBox::standard().unwrap();
    assert_eq!(sbox.forward(0), 0x63);
    assert_eq!(sbox.inverse(0x63), 0);
}

#[test]
fn giga_sbox_round_trips_on_a_sample() {
    let sbox = SBox::giga().unwrap();
    // Fixed, reproducible sample rather than an exhaustive 2^32 sweep.
    let sample: [u128; 8] = [
        0, 1, 2, 0xDEAD_BEEF, 0x1234_5678, 0xFFFF_FFFF, 0x8000_0000, 0x0001_0203,
    ];
    for &x in &sample {
        assert_eq!(sbox.inverse(sbox.forward(x)), x, "x = {x:#x}");
    }
}
