//! Conversion matrix of the `tiny` coefficient set (Q1.15 coefficients).
//!
//! Rows are output rates, columns are input rates. 24 kHz and 32 kHz do not
//! convert into each other in this set.

use super::{designed_int16, pair, RateTable, IDENTITY_Q15};

const RATES: [u32; 5] = [8000, 16000, 24000, 32000, 48000];

fn rate_index(rate: u32) -> Option<usize> {
    match rate {
        8000 => Some(0),
        16000 => Some(1),
        24000 => Some(2),
        32000 => Some(3),
        48000 => Some(4),
        _ => None,
    }
}

pub static TINY_INT16: RateTable = RateTable {
    name: "tiny",
    input_rates: &RATES,
    output_rates: &RATES,
    input_index: rate_index,
    output_index: rate_index,
    stages: &[
        // 8000 Hz
        &[
            pair(&IDENTITY_Q15, &IDENTITY_Q15), // 8000 Hz
            pair(&designed_int16::SRC_INT16_1_2_4535_5000, &IDENTITY_Q15), // 16000 Hz
            pair(&designed_int16::SRC_INT16_1_3_4535_5000, &IDENTITY_Q15), // 24000 Hz
            pair(&designed_int16::SRC_INT16_1_2_2268_5000, &designed_int16::SRC_INT16_1_2_4535_5000), // 32000 Hz
            pair(&designed_int16::SRC_INT16_1_3_2268_5000, &designed_int16::SRC_INT16_1_2_4535_5000), // 48000 Hz
        ],
        // 16000 Hz
        &[
            pair(&designed_int16::SRC_INT16_2_1_4535_5000, &IDENTITY_Q15), // 8000 Hz
            pair(&IDENTITY_Q15, &IDENTITY_Q15), // 16000 Hz
            pair(&designed_int16::SRC_INT16_2_3_4535_5000, &IDENTITY_Q15), // 24000 Hz
            pair(&designed_int16::SRC_INT16_1_2_4535_5000, &IDENTITY_Q15), // 32000 Hz
            pair(&designed_int16::SRC_INT16_1_3_4535_5000, &IDENTITY_Q15), // 48000 Hz
        ],
        // 24000 Hz
        &[
            pair(&designed_int16::SRC_INT16_3_1_4535_5000, &IDENTITY_Q15), // 8000 Hz
            pair(&designed_int16::SRC_INT16_3_2_4535_5000, &IDENTITY_Q15), // 16000 Hz
            pair(&IDENTITY_Q15, &IDENTITY_Q15), // 24000 Hz
            None, // 32000 Hz
            pair(&designed_int16::SRC_INT16_1_2_4535_5000, &IDENTITY_Q15), // 48000 Hz
        ],
        // 32000 Hz
        &[
            pair(&designed_int16::SRC_INT16_2_1_4535_5000, &designed_int16::SRC_INT16_2_1_2268_5000), // 8000 Hz
            pair(&designed_int16::SRC_INT16_2_1_4535_5000, &IDENTITY_Q15), // 16000 Hz
            None, // 24000 Hz
            pair(&IDENTITY_Q15, &IDENTITY_Q15), // 32000 Hz
            pair(&designed_int16::SRC_INT16_2_3_4535_5000, &IDENTITY_Q15), // 48000 Hz
        ],
        // 48000 Hz
        &[
            pair(&designed_int16::SRC_INT16_2_1_4535_5000, &designed_int16::SRC_INT16_3_1_2268_5000), // 8000 Hz
            pair(&designed_int16::SRC_INT16_3_1_4535_5000, &IDENTITY_Q15), // 16000 Hz
            pair(&designed_int16::SRC_INT16_2_1_4535_5000, &IDENTITY_Q15), // 24000 Hz
            pair(&designed_int16::SRC_INT16_3_2_4535_5000, &IDENTITY_Q15), // 32000 Hz
            pair(&IDENTITY_Q15, &IDENTITY_Q15), // 48000 Hz
        ],
    ],
};
