//! Conversion matrix of the `std` coefficient set (Q1.31 coefficients).
//!
//! Rows are output rates, columns are input rates.

use super::{designed_int32, pair, reference_int32, RateTable, IDENTITY_Q31};

const INPUT_RATES: [u32; 16] = [
    8000, 11025, 12000, 16000, 18900, 22050, 24000, 32000,
    37800, 44100, 48000, 64000, 88200, 96000, 176400, 192000,
];

const OUTPUT_RATES: [u32; 10] = [8000, 16000, 24000, 32000, 44100, 48000, 88200, 96000, 176400, 192000];

fn input_index(rate: u32) -> Option<usize> {
    match rate {
        8000 => Some(0),
        11025 => Some(1),
        12000 => Some(2),
        16000 => Some(3),
        18900 => Some(4),
        22050 => Some(5),
        24000 => Some(6),
        32000 => Some(7),
        37800 => Some(8),
        44100 => Some(9),
        48000 => Some(10),
        64000 => Some(11),
        88200 => Some(12),
        96000 => Some(13),
        176400 => Some(14),
        192000 => Some(15),
        _ => None,
    }
}

fn output_index(rate: u32) -> Option<usize> {
    match rate {
        8000 => Some(0),
        16000 => Some(1),
        24000 => Some(2),
        32000 => Some(3),
        44100 => Some(4),
        48000 => Some(5),
        88200 => Some(6),
        96000 => Some(7),
        176400 => Some(8),
        192000 => Some(9),
        _ => None,
    }
}

pub static STD_INT32: RateTable = RateTable {
    name: "std",
    input_rates: &INPUT_RATES,
    output_rates: &OUTPUT_RATES,
    input_index,
    output_index,
    stages: &[
        // 8000 Hz
        &[
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 8000 Hz
            pair(&reference_int32::SRC_INT32_16_21_4319_5000, &designed_int32::SRC_INT32_20_21_4535_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_2_3_4535_5000, &IDENTITY_Q31), // 12000 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_10_21_3455_5000, &reference_int32::SRC_INT32_16_21_4535_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_1_3_4535_5000, &IDENTITY_Q31), // 24000 Hz
            pair(&designed_int32::SRC_INT32_1_2_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 32000 Hz
            None, // 37800 Hz
            pair(&designed_int32::SRC_INT32_8_21_2160_5000, &designed_int32::SRC_INT32_10_21_4535_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_1_3_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 48000 Hz
            pair(&designed_int32::SRC_INT32_1_4_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 64000 Hz
            pair(&designed_int32::SRC_INT32_5_21_1728_5000, &designed_int32::SRC_INT32_8_21_4535_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_1_4_1512_5000, &designed_int32::SRC_INT32_1_3_4535_5000), // 96000 Hz
            pair(&designed_int32::SRC_INT32_4_21_1080_5000, &designed_int32::SRC_INT32_5_21_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_6_1134_5000, &designed_int32::SRC_INT32_1_4_4535_5000), // 192000 Hz
        ],
        // 16000 Hz
        &[
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 8000 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_20_21_3125_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_4_3_4535_5000, &IDENTITY_Q31), // 12000 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 16000 Hz
            None, // 18900 Hz
            pair(&reference_int32::SRC_INT32_16_21_4319_5000, &designed_int32::SRC_INT32_20_21_4535_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_2_3_4535_5000, &IDENTITY_Q31), // 24000 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 32000 Hz
            None, // 37800 Hz
            pair(&designed_int32::SRC_INT32_10_21_3455_5000, &reference_int32::SRC_INT32_16_21_4535_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_1_3_4535_5000, &IDENTITY_Q31), // 48000 Hz
            pair(&designed_int32::SRC_INT32_1_2_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 64000 Hz
            pair(&designed_int32::SRC_INT32_8_21_2160_5000, &designed_int32::SRC_INT32_10_21_4535_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_1_3_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 96000 Hz
            pair(&designed_int32::SRC_INT32_5_21_1728_5000, &designed_int32::SRC_INT32_8_21_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_4_1512_5000, &designed_int32::SRC_INT32_1_3_4535_5000), // 192000 Hz
        ],
        // 24000 Hz
        &[
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &IDENTITY_Q31), // 8000 Hz
            pair(&designed_int32::SRC_INT32_8_7_4535_5000, &reference_int32::SRC_INT32_40_21_3968_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 12000 Hz
            pair(&designed_int32::SRC_INT32_3_2_4535_5000, &IDENTITY_Q31), // 16000 Hz
            pair(&designed_int32::SRC_INT32_10_9_4535_5000, &designed_int32::SRC_INT32_8_7_4082_5000), // 18900 Hz
            pair(&designed_int32::SRC_INT32_8_7_4535_5000, &designed_int32::SRC_INT32_20_21_4167_5000), // 22050 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 24000 Hz
            pair(&designed_int32::SRC_INT32_3_4_4535_5000, &IDENTITY_Q31), // 32000 Hz
            None, // 37800 Hz
            pair(&designed_int32::SRC_INT32_8_7_2468_5000, &designed_int32::SRC_INT32_10_21_4535_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 48000 Hz
            pair(&designed_int32::SRC_INT32_1_2_3401_5000, &designed_int32::SRC_INT32_3_4_4535_5000), // 64000 Hz
            pair(&designed_int32::SRC_INT32_8_21_3239_5000, &designed_int32::SRC_INT32_5_7_4535_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_1_2_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 96000 Hz
            pair(&designed_int32::SRC_INT32_4_21_3239_5000, &designed_int32::SRC_INT32_5_7_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_4_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 192000 Hz
        ],
        // 32000 Hz
        &[
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_40_21_2976_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_4_3_4535_5000, &designed_int32::SRC_INT32_2_1_3401_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_20_21_3125_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_4_3_4535_5000, &IDENTITY_Q31), // 24000 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 32000 Hz
            None, // 37800 Hz
            pair(&reference_int32::SRC_INT32_16_21_4319_5000, &designed_int32::SRC_INT32_20_21_4535_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_2_3_4535_5000, &IDENTITY_Q31), // 48000 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 64000 Hz
            pair(&designed_int32::SRC_INT32_10_21_3455_5000, &reference_int32::SRC_INT32_16_21_4535_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_1_3_4535_5000, &IDENTITY_Q31), // 96000 Hz
            pair(&designed_int32::SRC_INT32_8_21_2160_5000, &designed_int32::SRC_INT32_10_21_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_3_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 192000 Hz
        ],
        // 44100 Hz
        &[
            pair(&designed_int32::SRC_INT32_21_10_4535_5000, &designed_int32::SRC_INT32_21_8_2160_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_8_3239_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_21_16_4535_5000, &designed_int32::SRC_INT32_21_10_3455_5000), // 16000 Hz
            pair(&designed_int32::SRC_INT32_7_3_4535_5000, &IDENTITY_Q31), // 18900 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 22050 Hz
            pair(&designed_int32::SRC_INT32_21_10_4535_5000, &designed_int32::SRC_INT32_7_8_2468_5000), // 24000 Hz
            pair(&designed_int32::SRC_INT32_21_20_4535_5000, &reference_int32::SRC_INT32_21_16_4319_5000), // 32000 Hz
            pair(&designed_int32::SRC_INT32_7_3_4535_5000, &designed_int32::SRC_INT32_1_2_3887_5000), // 37800 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 44100 Hz
            pair(&reference_int32::SRC_INT32_21_20_4167_5000, &designed_int32::SRC_INT32_7_8_4535_5000), // 48000 Hz
            pair(&designed_int32::SRC_INT32_21_20_3125_5000, &designed_int32::SRC_INT32_21_32_4535_5000), // 64000 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 88200 Hz
            pair(&designed_int32::SRC_INT32_21_40_3968_5000, &designed_int32::SRC_INT32_7_8_4535_5000), // 96000 Hz
            pair(&designed_int32::SRC_INT32_1_2_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_21_80_3968_5000, &designed_int32::SRC_INT32_7_8_4535_5000), // 192000 Hz
        ],
        // 48000 Hz
        &[
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_3_1_2268_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_20_7_2976_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &IDENTITY_Q31), // 16000 Hz
            pair(&designed_int32::SRC_INT32_10_9_4535_5000, &designed_int32::SRC_INT32_16_7_4082_5000), // 18900 Hz
            pair(&designed_int32::SRC_INT32_8_7_4535_5000, &reference_int32::SRC_INT32_40_21_3968_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 24000 Hz
            pair(&designed_int32::SRC_INT32_3_2_4535_5000, &IDENTITY_Q31), // 32000 Hz
            pair(&designed_int32::SRC_INT32_10_9_4535_5000, &designed_int32::SRC_INT32_8_7_4082_5000), // 37800 Hz
            pair(&designed_int32::SRC_INT32_8_7_4535_5000, &designed_int32::SRC_INT32_20_21_4167_5000), // 44100 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 48000 Hz
            pair(&designed_int32::SRC_INT32_3_4_4535_5000, &IDENTITY_Q31), // 64000 Hz
            pair(&designed_int32::SRC_INT32_8_7_2468_5000, &designed_int32::SRC_INT32_10_21_4535_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_1_2_4535_5000, &IDENTITY_Q31), // 96000 Hz
            pair(&designed_int32::SRC_INT32_8_21_3239_5000, &designed_int32::SRC_INT32_5_7_4535_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_2_2268_5000, &designed_int32::SRC_INT32_1_2_4535_5000), // 192000 Hz
        ],
        // 88200 Hz
        &[
            pair(&designed_int32::SRC_INT32_21_8_4535_5000, &designed_int32::SRC_INT32_21_5_1728_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_4_1_2268_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_4_3239_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_21_10_4535_5000, &designed_int32::SRC_INT32_21_8_2160_5000), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_8_3239_5000), // 24000 Hz
            pair(&designed_int32::SRC_INT32_21_16_4535_5000, &designed_int32::SRC_INT32_21_10_3455_5000), // 32000 Hz
            pair(&designed_int32::SRC_INT32_7_3_4535_5000, &IDENTITY_Q31), // 37800 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 44100 Hz
            pair(&designed_int32::SRC_INT32_21_10_4535_5000, &designed_int32::SRC_INT32_7_8_2468_5000), // 48000 Hz
            pair(&designed_int32::SRC_INT32_21_20_4535_5000, &reference_int32::SRC_INT32_21_16_4319_5000), // 64000 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 88200 Hz
            pair(&designed_int32::SRC_INT32_21_20_2500_5000, &designed_int32::SRC_INT32_7_8_2721_5000), // 96000 Hz
            pair(&designed_int32::SRC_INT32_1_2_2721_5000, &IDENTITY_Q31), // 176400 Hz
            pair(&designed_int32::SRC_INT32_21_40_2381_5000, &designed_int32::SRC_INT32_7_8_2721_5000), // 192000 Hz
        ],
        // 96000 Hz
        &[
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &designed_int32::SRC_INT32_4_1_1512_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_40_7_2976_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_4_1_2268_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_3_1_2268_5000), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_20_7_2976_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 24000 Hz
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &IDENTITY_Q31), // 32000 Hz
            pair(&designed_int32::SRC_INT32_10_9_4535_5000, &designed_int32::SRC_INT32_16_7_4082_5000), // 37800 Hz
            pair(&designed_int32::SRC_INT32_8_7_4535_5000, &reference_int32::SRC_INT32_40_21_3968_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &IDENTITY_Q31), // 48000 Hz
            pair(&designed_int32::SRC_INT32_3_2_4535_5000, &IDENTITY_Q31), // 64000 Hz
            pair(&designed_int32::SRC_INT32_8_7_2721_5000, &designed_int32::SRC_INT32_20_21_2500_5000), // 88200 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 96000 Hz
            pair(&designed_int32::SRC_INT32_8_7_1361_5000, &designed_int32::SRC_INT32_10_21_2500_5000), // 176400 Hz
            pair(&designed_int32::SRC_INT32_1_2_2500_5000, &IDENTITY_Q31), // 192000 Hz
        ],
        // 176400 Hz
        &[
            pair(&reference_int32::SRC_INT32_21_5_4535_5000, &designed_int32::SRC_INT32_21_4_1080_5000), // 8000 Hz
            pair(&designed_int32::SRC_INT32_4_1_4535_5000, &designed_int32::SRC_INT32_4_1_1134_5000), // 11025 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_2_3239_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_21_8_4535_5000, &designed_int32::SRC_INT32_21_5_1728_5000), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_4_1_2268_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_4_3239_5000), // 24000 Hz
            pair(&designed_int32::SRC_INT32_21_10_4535_5000, &designed_int32::SRC_INT32_21_8_2160_5000), // 32000 Hz
            None, // 37800 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_7_5_4535_5000, &designed_int32::SRC_INT32_21_8_3239_5000), // 48000 Hz
            pair(&designed_int32::SRC_INT32_21_16_4535_5000, &designed_int32::SRC_INT32_21_10_3455_5000), // 64000 Hz
            pair(&designed_int32::SRC_INT32_2_1_2721_5000, &IDENTITY_Q31), // 88200 Hz
            pair(&designed_int32::SRC_INT32_21_10_2500_5000, &designed_int32::SRC_INT32_7_8_1361_5000), // 96000 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 176400 Hz
            pair(&designed_int32::SRC_INT32_21_20_1250_5000, &designed_int32::SRC_INT32_7_8_1361_5000), // 192000 Hz
        ],
        // 192000 Hz
        &[
            pair(&designed_int32::SRC_INT32_4_1_4535_5000, &designed_int32::SRC_INT32_6_1_1134_5000), // 8000 Hz
            None, // 11025 Hz
            pair(&designed_int32::SRC_INT32_4_1_4535_5000, &designed_int32::SRC_INT32_4_1_1134_5000), // 12000 Hz
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &designed_int32::SRC_INT32_4_1_1512_5000), // 16000 Hz
            None, // 18900 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_40_7_2976_5000), // 22050 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_4_1_2268_5000), // 24000 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_3_1_2268_5000), // 32000 Hz
            None, // 37800 Hz
            pair(&designed_int32::SRC_INT32_32_21_4535_5000, &designed_int32::SRC_INT32_20_7_2976_5000), // 44100 Hz
            pair(&designed_int32::SRC_INT32_2_1_4535_5000, &designed_int32::SRC_INT32_2_1_2268_5000), // 48000 Hz
            pair(&designed_int32::SRC_INT32_3_1_4535_5000, &IDENTITY_Q31), // 64000 Hz
            pair(&designed_int32::SRC_INT32_8_7_2721_5000, &designed_int32::SRC_INT32_40_21_2381_5000), // 88200 Hz
            pair(&designed_int32::SRC_INT32_2_1_2500_5000, &IDENTITY_Q31), // 96000 Hz
            pair(&designed_int32::SRC_INT32_8_7_1361_5000, &designed_int32::SRC_INT32_20_21_1250_5000), // 176400 Hz
            pair(&IDENTITY_Q31, &IDENTITY_Q31), // 192000 Hz
        ],
    ],
};
