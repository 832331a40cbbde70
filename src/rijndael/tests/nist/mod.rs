mod test_aes_vectors;
