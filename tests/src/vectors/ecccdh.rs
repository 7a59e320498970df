//! Cofactor Diffie-Hellman over the NIST prime curves (CAVS 14.1 ECC CDH Primitive)

use crate::suites::ecdh::EcdhTestCase;

pub static ECCCDH_CASES: &[EcdhTestCase<'static>] = &[
    EcdhTestCase {
        name: "ECCCDH/SECP224R1 0",
        variant: "ECCCDH",
        curve: "SECP224R1",
        our_priv_key: &[
            0x43, 0xd4, 0x4f, 0xdd, 0x0d, 0xc9, 0xaa, 0x1c, 0x5a, 0xa0, 0xb2, 0x03,
            0x2a, 0x37, 0x82, 0x9a, 0xb9, 0x80, 0xd6, 0x0f, 0xc3, 0x88, 0x55, 0x08,
            0xc7, 0x4b, 0xe8, 0x65,
        ],
        peer_pub_key: &[
            0x04, 0x8e, 0x88, 0x9a, 0x62, 0xe8, 0xb6, 0xef, 0xab, 0x40, 0x91, 0x99,
            0x20, 0xbe, 0xc1, 0xfb, 0x28, 0xbd, 0xaa, 0x16, 0xcd, 0x84, 0xba, 0x9a,
            0xf4, 0x12, 0x3a, 0xf5, 0x17, 0x77, 0x46, 0x76, 0x2b, 0xc1, 0xf1, 0xb9,
            0xdc, 0x0d, 0x15, 0x1e, 0x9f, 0x4e, 0x0e, 0x4f, 0x10, 0xcb, 0x3b, 0x27,
            0x40, 0xae, 0xb9, 0x83, 0x2c, 0x4c, 0xce, 0x74, 0x3a,
        ],
        exp_our_pub_key: &[
            0x04, 0x56, 0x72, 0x18, 0xc0, 0x14, 0x35, 0x1a, 0x00, 0x2a, 0x9c, 0xe7,
            0x3a, 0xb0, 0x86, 0xcf, 0xfe, 0x67, 0x56, 0x5d, 0x6a, 0xf7, 0xe5, 0x63,
            0xed, 0x4c, 0x37, 0xbf, 0x29, 0x9b, 0x66, 0x82, 0xf9, 0x31, 0x85, 0x05,
            0x67, 0x27, 0x50, 0x20, 0x4f, 0x98, 0x99, 0xc0, 0x69, 0xb7, 0x0b, 0xee,
            0xb5, 0x71, 0x3f, 0x70, 0xf7, 0xa3, 0x0b, 0x39, 0x35,
        ],
        exp_shared_secret: &[
            0xa5, 0xf0, 0xcc, 0xd9, 0x60, 0x2e, 0x97, 0x68, 0x46, 0x65, 0xf1, 0xd0,
            0xe1, 0xcc, 0x39, 0x86, 0x1a, 0x6e, 0xe3, 0x9c, 0xea, 0xe6, 0xf5, 0x16,
            0xc0, 0x99, 0xaf, 0xcc,
        ],
        expected_error: None,
    },
    EcdhTestCase {
        name: "ECCCDH/SECP256R1 0",
        variant: "ECCCDH",
        curve: "SECP256R1",
        our_priv_key: &[
            0xfa, 0x54, 0xf7, 0xde, 0x92, 0xb1, 0xfe, 0xe3, 0x94, 0xb8, 0xa2, 0x05,
            0xea, 0xce, 0x3e, 0x90, 0x3e, 0x5e, 0x44, 0x51, 0xbd, 0xce, 0xfa, 0xca,
            0xa0, 0xa8, 0x85, 0xfe, 0xbc, 0xd1, 0x51, 0xe3,
        ],
        peer_pub_key: &[
            0x04, 0x15, 0xa1, 0x5f, 0x9a, 0xd7, 0x8b, 0x30, 0xf8, 0xc9, 0x6a, 0x72,
            0x51, 0x10, 0xa1, 0x75, 0xdf, 0x8e, 0xbd, 0x4e, 0x17, 0x59, 0x35, 0x72,
            0xa4, 0x1b, 0x98, 0x9b, 0x06, 0xea, 0xe0, 0xc1, 0x1a, 0xd9, 0x51, 0xe4,
            0xf9, 0x4d, 0x23, 0x31, 0x84, 0xf4, 0x73, 0xf9, 0x09, 0x6a, 0xc1, 0x55,
            0x12, 0x28, 0xa7, 0xa8, 0x09, 0xd7, 0x95, 0x8b, 0x17, 0x67, 0x96, 0x75,
            0xe1, 0x0e, 0xb6, 0x7c, 0xca,
        ],
        exp_our_pub_key: &[
            0x04, 0xc4, 0xad, 0xb7, 0x26, 0x25, 0x97, 0x83, 0x1e, 0x75, 0x57, 0xaa,
            0x69, 0xd9, 0x4e, 0x5a, 0xe3, 0xee, 0xbb, 0x4e, 0x52, 0xab, 0xc5, 0x09,
            0x67, 0x4f, 0xf1, 0x59, 0xbd, 0x3a, 0xa5, 0x72, 0x93, 0xeb, 0x89, 0xc6,
            0xa4, 0x74, 0xc5, 0xa5, 0xe7, 0xa6, 0x47, 0x5f, 0xe7, 0x34, 0x23, 0x21,
            0x31, 0x1c, 0x90, 0x94, 0x13, 0xc1, 0x55, 0xe8, 0xa4, 0xb6, 0x00, 0xd7,
            0x75, 0x84, 0x98, 0x5f, 0x31,
        ],
        exp_shared_secret: &[
            0x91, 0xd6, 0xf9, 0xd0, 0xee, 0x8d, 0xd2, 0x1f, 0x85, 0x0e, 0xe4, 0xdf,
            0x59, 0xa3, 0xfe, 0x51, 0x0d, 0x3e, 0xbc, 0x19, 0x4b, 0x8f, 0x0d, 0x1b,
            0x12, 0xa3, 0x44, 0x09, 0xf5, 0xd8, 0xc0, 0xd0,
        ],
        expected_error: None,
    },
    EcdhTestCase {
        name: "ECCCDH/SECP384R1 0",
        variant: "ECCCDH",
        curve: "SECP384R1",
        our_priv_key: &[
            0x9e, 0x40, 0x31, 0xf5, 0xee, 0xaf, 0x06, 0x5b, 0xb6, 0xe0, 0x47, 0x69,
            0xf6, 0x2d, 0xa5, 0x29, 0x7b, 0x0b, 0x0b, 0x29, 0x86, 0xda, 0x90, 0xe0,
            0xf6, 0x32, 0x5d, 0x84, 0x76, 0x8a, 0x8a, 0x01, 0x11, 0xe3, 0x46, 0x81,
            0xee, 0xaf, 0x42, 0x3d, 0x75, 0xdc, 0x2a, 0x3d, 0x2f, 0xd6, 0x1e, 0x00,
        ],
        peer_pub_key: &[
            0x04, 0x21, 0xc3, 0x99, 0xfd, 0xe6, 0xa7, 0x3b, 0x60, 0xd7, 0x46, 0x52,
            0xe3, 0x94, 0xae, 0xe1, 0x10, 0xac, 0x83, 0x10, 0x3c, 0x1b, 0x96, 0x22,
            0x64, 0x47, 0x73, 0x19, 0x73, 0xbf, 0x5a, 0x44, 0x6b, 0x6b, 0x03, 0xbd,
            0x2d, 0x76, 0x7f, 0xaa, 0x25, 0xd5, 0xa8, 0x23, 0x9d, 0xe7, 0x6f, 0x42,
            0x71, 0x13, 0x04, 0x04, 0xca, 0x3b, 0x23, 0x23, 0xda, 0x79, 0x76, 0x9b,
            0x4d, 0x04, 0xb8, 0x69, 0x7b, 0x35, 0xb9, 0x1e, 0x1e, 0xa1, 0xe1, 0x9e,
            0x33, 0xf8, 0xca, 0xe2, 0x86, 0x39, 0xbd, 0x6d, 0xef, 0x69, 0x61, 0x0d,
            0xce, 0xea, 0x3a, 0x69, 0x1b, 0x52, 0xf2, 0xae, 0x82, 0xa2, 0x03, 0x76,
            0xc9,
        ],
        exp_our_pub_key: &[
            0x04, 0x30, 0x86, 0x82, 0xaa, 0xa4, 0x07, 0x55, 0x9a, 0xa5, 0x00, 0x74,
            0x81, 0xa2, 0x44, 0x29, 0x58, 0x93, 0x61, 0xe6, 0x05, 0x95, 0x4b, 0x9d,
            0xb7, 0x90, 0xc2, 0xb6, 0x52, 0xae, 0x8f, 0x69, 0x06, 0x24, 0x75, 0x19,
            0xa5, 0x9d, 0xcf, 0x7f, 0x54, 0xdd, 0xf0, 0xc0, 0x6e, 0xb7, 0x56, 0x33,
            0x28, 0xab, 0xe9, 0xef, 0xab, 0x01, 0x26, 0x85, 0x48, 0x5e, 0xde, 0x55,
            0x99, 0xe7, 0x9d, 0xdb, 0x7a, 0xfb, 0x10, 0x7a, 0x29, 0xb3, 0xaa, 0xa2,
            0x39, 0x8a, 0x55, 0xe3, 0xa4, 0x99, 0x66, 0x1f, 0x34, 0xcd, 0xfe, 0xd6,
            0x31, 0xe8, 0x33, 0x35, 0xe9, 0xbc, 0x65, 0x74, 0xf8, 0x5c, 0x59, 0x5e,
            0x08,
        ],
        exp_shared_secret: &[
            0x34, 0xd0, 0x90, 0x75, 0x09, 0xb9, 0xba, 0xdd, 0xfc, 0x02, 0xa5, 0xad,
            0x53, 0x3e, 0x12, 0x3b, 0x9f, 0x8e, 0xc9, 0xc6, 0x53, 0xa0, 0x9c, 0x11,
            0xea, 0x0a, 0xfe, 0xeb, 0x75, 0xf5, 0x96, 0x03, 0x38, 0x9c, 0xe6, 0x69,
            0x4d, 0x87, 0xf8, 0x67, 0x8d, 0x85, 0x34, 0x95, 0x58, 0x2e, 0xd7, 0xdc,
        ],
        expected_error: None,
    },
];
