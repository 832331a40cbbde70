mod nist;
mod test_bits;
mod test_codec;
mod test_field;
mod test_matrix;
mod test_polynomial;
mod test_sbox;
