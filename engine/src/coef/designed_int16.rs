//! Designed polyphase stages with Q1.15 coefficients.
//!
//! Generated by tools/src_design.py. Do not edit by hand.

use crate::stage::{StageDescriptor, Taps};

pub static SRC_INT16_1_2_2268_5000: StageDescriptor = StageDescriptor {
    name: "int16_1_2_2268_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 32,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_1_2_2268_5000_FIR),
};

static SRC_INT16_1_2_2268_5000_FIR: [i16; 32] = [
    -12, -23, 17, 99, 86, -134, -355, -141, 540, 886,
    -5, -1672, -1953, 1102, 6711, 11240, 11240, 6711, 1102, -1953,
    -1672, -5, 886, 540, -141, -355, -134, 86, 99, 17,
    -23, -12,
];

pub static SRC_INT16_1_2_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_1_2_4535_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 176,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_1_2_4535_5000_FIR),
};

static SRC_INT16_1_2_4535_5000_FIR: [i16; 176] = [
    -1, -1, 2, 2, -2, -3, 2, 5, -2, -6,
    1, 8, 0, -10, -1, 12, 4, -15, -7, 16,
    11, -18, -16, 19, 22, -18, -28, 17, 36, -14,
    -44, 10, 52, -3, -60, -6, 68, 17, -74, -31,
    79, 48, -82, -67, 83, 88, -80, -111, 72, 136,
    -60, -162, 42, 188, -18, -213, -13, 237, 51, -258,
    -97, 275, 151, -286, -215, 289, 288, -284, -372, 266,
    468, -233, -578, 180, 707, -100, -862, -18, 1057, 196,
    -1323, -483, 1739, 1014, -2560, -2360, 5421, 14201, 14201, 5421,
    -2360, -2560, 1014, 1739, -483, -1323, 196, 1057, -18, -862,
    -100, 707, 180, -578, -233, 468, 266, -372, -284, 288,
    289, -215, -286, 151, 275, -97, -258, 51, 237, -13,
    -213, -18, 188, 42, -162, -60, 136, 72, -111, -80,
    88, 83, -67, -82, 48, 79, -31, -74, 17, 68,
    -6, -60, -3, 52, 10, -44, -14, 36, 17, -28,
    -18, 22, 19, -16, -18, 11, 16, -7, -15, 4,
    12, -1, -10, 0, 8, 1, -6, -2, 5, 2,
    -3, -2, 2, 2, -1, -1,
];

pub static SRC_INT16_1_3_2268_5000: StageDescriptor = StageDescriptor {
    name: "int16_1_3_2268_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 48,
    block_in: 3,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_1_3_2268_5000_FIR),
};

static SRC_INT16_1_3_2268_5000_FIR: [i16; 48] = [
    -6, -13, -14, 4, 39, 72, 68, -1, -121, -225,
    -215, -32, 279, 551, 557, 156, -566, -1257, -1406, -585,
    1288, 3822, 6252, 7739, 7739, 6252, 3822, 1288, -585, -1406,
    -1257, -566, 156, 557, 551, 279, -32, -215, -225, -121,
    -1, 68, 72, 39, 4, -14, -13, -6,
];

pub static SRC_INT16_1_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_1_3_4535_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 264,
    block_in: 3,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_1_3_4535_5000_FIR),
};

static SRC_INT16_1_3_4535_5000_FIR: [i16; 264] = [
    -1, -1, -1, 1, 2, 1, -1, -2, -2, 1,
    3, 3, 0, -4, -4, 0, 4, 5, 1, -4,
    -7, -3, 5, 9, 5, -4, -10, -7, 4, 12,
    10, -3, -14, -13, 1, 15, 17, 2, -16, -21,
    -6, 17, 25, 11, -16, -30, -16, 14, 34, 23,
    -11, -38, -31, 7, 41, 39, -1, -44, -49, -8,
    44, 58, 18, -43, -68, -30, 40, 78, 44, -35,
    -86, -60, 26, 94, 78, -14, -100, -97, -2, 103,
    117, 21, -103, -139, -45, 99, 160, 73, -90, -180,
    -105, 76, 200, 143, -55, -217, -184, 27, 231, 231,
    10, -240, -283, -58, 243, 340, 119, -239, -403, -195,
    224, 474, 292, -196, -556, -419, 148, 655, 593, -69,
    -784, -851, -66, 977, 1287, 328, -1342, -2255, -1029, 2507,
    6932, 9987, 9987, 6932, 2507, -1029, -2255, -1342, 328, 1287,
    977, -66, -851, -784, -69, 593, 655, 148, -419, -556,
    -196, 292, 474, 224, -195, -403, -239, 119, 340, 243,
    -58, -283, -240, 10, 231, 231, 27, -184, -217, -55,
    143, 200, 76, -105, -180, -90, 73, 160, 99, -45,
    -139, -103, 21, 117, 103, -2, -97, -100, -14, 78,
    94, 26, -60, -86, -35, 44, 78, 40, -30, -68,
    -43, 18, 58, 44, -8, -49, -44, -1, 39, 41,
    7, -31, -38, -11, 23, 34, 14, -16, -30, -16,
    11, 25, 17, -6, -21, -16, 2, 17, 15, 1,
    -13, -14, -3, 10, 12, 4, -7, -10, -4, 5,
    9, 5, -3, -7, -4, 1, 5, 4, 0, -4,
    -4, 0, 3, 3, 1, -2, -2, -1, 1, 2,
    1, -1, -1, -1,
];

pub static SRC_INT16_2_1_2268_5000: StageDescriptor = StageDescriptor {
    name: "int16_2_1_2268_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 16,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_2_1_2268_5000_FIR),
};

static SRC_INT16_2_1_2268_5000_FIR: [i16; 32] = [
    -24, 34, 171, -709, 1079, -11, -3907, 13421, 22480, 2203,
    -3345, 1772, -281, -268, 198, -45, -45, 198, -268, -281,
    1772, -3345, 2203, 22480, 13421, -3907, -11, 1079, -709, 171,
    34, -24,
];

pub static SRC_INT16_2_1_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_2_1_4535_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 88,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_2_1_4535_5000_FIR),
};

static SRC_INT16_2_1_4535_5000_FIR: [i16; 176] = [
    -2, 3, -4, 4, -3, 2, 0, -3, 8, -14,
    22, -32, 43, -57, 71, -87, 104, -120, 135, -149,
    159, -165, 166, -159, 144, -120, 84, -37, -25, 101,
    -193, 303, -430, 576, -744, 936, -1156, 1414, -1724, 2114,
    -2647, 3478, -5120, 10841, 28402, -4720, 2029, -966, 391, -35,
    -200, 359, -465, 531, -567, 579, -572, 550, -516, 474,
    -427, 376, -324, 272, -223, 176, -133, 95, -62, 35,
    -12, -6, 19, -29, 34, -37, 37, -36, 33, -29,
    25, -20, 16, -13, 9, -6, 4, -3, -3, 4,
    -6, 9, -13, 16, -20, 25, -29, 33, -36, 37,
    -37, 34, -29, 19, -6, -12, 35, -62, 95, -133,
    176, -223, 272, -324, 376, -427, 474, -516, 550, -572,
    579, -567, 531, -465, 359, -200, -35, 391, -966, 2029,
    -4720, 28402, 10841, -5120, 3478, -2647, 2114, -1724, 1414, -1156,
    936, -744, 576, -430, 303, -193, 101, -25, -37, 84,
    -120, 144, -159, 166, -165, 159, -149, 135, -120, 104,
    -87, 71, -57, 43, -32, 22, -14, 8, -3, 0,
    2, -3, 4, -4, 3, -2,
];

pub static SRC_INT16_2_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_2_3_4535_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 132,
    block_in: 3,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_2_3_4535_5000_FIR),
};

static SRC_INT16_2_3_4535_5000_FIR: [i16; 264] = [
    -1, -1, 3, -1, -4, 6, 0, -8, 8, 3,
    -14, 9, 9, -21, 8, 20, -28, 1, 34, -33,
    -12, 51, -32, -33, 68, -23, -62, 83, -1, -97,
    89, 35, -136, 81, 88, -173, 52, 155, -199, -3,
    235, -206, -90, 320, -181, -211, 399, -111, -369, 461,
    21, -565, 486, 237, -806, 449, 584, -1111, 296, 1187,
    -1568, -132, 2574, -2685, -2057, 13865, 19974, 5014, -4510, 655,
    1955, -1701, -138, 1309, -839, -392, 947, -390, -478, 679,
    -116, -480, 462, 54, -433, 285, 152, -361, 146, 198,
    -277, 42, 206, -194, -28, 188, -120, -69, 155, -59,
    -87, 117, -15, -87, 79, 14, -76, 46, 29, -60,
    21, 33, -42, 4, 31, -26, -5, 24, -14, -9,
    17, -6, -9, 11, -1, -7, 5, 1, -4, 2,
    1, -2, -2, 1, 2, -4, 1, 5, -7, -1,
    11, -9, -6, 17, -9, -14, 24, -5, -26, 31,
    4, -42, 33, 21, -60, 29, 46, -76, 14, 79,
    -87, -15, 117, -87, -59, 155, -69, -120, 188, -28,
    -194, 206, 42, -277, 198, 146, -361, 152, 285, -433,
    54, 462, -480, -116, 679, -478, -390, 947, -392, -839,
    1309, -138, -1701, 1955, 655, -4510, 5014, 19974, 13865, -2057,
    -2685, 2574, -132, -1568, 1187, 296, -1111, 584, 449, -806,
    237, 486, -565, 21, 461, -369, -111, 399, -211, -181,
    320, -90, -206, 235, -3, -199, 155, 52, -173, 88,
    81, -136, 35, 89, -97, -1, 83, -62, -23, 68,
    -33, -32, 51, -12, -33, 34, 1, -28, 20, 8,
    -21, 9, 9, -14, 3, 8, -8, 0, 6, -4,
    -1, 3, -1, -1,
];

pub static SRC_INT16_3_1_2268_5000: StageDescriptor = StageDescriptor {
    name: "int16_3_1_2268_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 3,
    subfilter_length: 16,
    block_in: 1,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_3_1_2268_5000_FIR),
};

static SRC_INT16_3_1_2268_5000_FIR: [i16; 48] = [
    -18, 11, 204, -674, 838, 469, -4218, 11466, 23216, 3864,
    -3772, 1670, -96, -364, 217, -41, -40, 117, -3, -645,
    1652, -1699, -1755, 18756, 18756, -1755, -1699, 1652, -645, -3,
    117, -40, -41, 217, -364, -96, 1670, -3772, 3864, 23216,
    11466, -4218, 469, 838, -674, 204, 11, -18,
];

pub static SRC_INT16_3_1_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_3_1_4535_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 3,
    subfilter_length: 88,
    block_in: 1,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_3_1_4535_5000_FIR),
};

static SRC_INT16_3_1_4535_5000_FIR: [i16; 264] = [
    -2, 2, -2, 2, -1, -1, 4, -8, 14, -21,
    29, -39, 51, -63, 76, -90, 103, -114, 124, -131,
    133, -130, 121, -104, 78, -42, -5, 63, -134, 219,
    -316, 428, -553, 693, -848, 1019, -1208, 1421, -1667, 1964,
    -2352, 2932, -4027, 7520, 29961, -3086, 983, -198, -207, 444,
    -588, 673, -717, 730, -719, 692, -650, 599, -541, 479,
    -416, 352, -291, 233, -180, 131, -89, 53, -23, -2,
    20, -34, 43, -48, 50, -49, 46, -42, 37, -31,
    26, -20, 16, -12, 8, -5, 3, -2, -3, 5,
    -7, 9, -11, 12, -13, 14, -13, 11, -8, 2,
    7, -18, 32, -49, 69, -92, 118, -146, 175, -204,
    233, -259, 282, -299, 309, -309, 297, -271, 228, -166,
    81, 31, -174, 356, -585, 877, -1258, 1780, -2552, 3861,
    -6765, 20797, 20797, -6765, 3861, -2552, 1780, -1258, 877, -585,
    356, -174, 31, 81, -166, 228, -271, 297, -309, 309,
    -299, 282, -259, 233, -204, 175, -146, 118, -92, 69,
    -49, 32, -18, 7, 2, -8, 11, -13, 14, -13,
    12, -11, 9, -7, 5, -3, -2, 3, -5, 8,
    -12, 16, -20, 26, -31, 37, -42, 46, -49, 50,
    -48, 43, -34, 20, -2, -23, 53, -89, 131, -180,
    233, -291, 352, -416, 479, -541, 599, -650, 692, -719,
    730, -717, 673, -588, 444, -207, -198, 983, -3086, 29961,
    7520, -4027, 2932, -2352, 1964, -1667, 1421, -1208, 1019, -848,
    693, -553, 428, -316, 219, -134, 63, -5, -42, 78,
    -104, 121, -130, 133, -131, 124, -114, 103, -90, 76,
    -63, 51, -39, 29, -21, 14, -8, 4, -1, -1,
    2, -2, 2, -2,
];

pub static SRC_INT16_3_2_4535_5000: StageDescriptor = StageDescriptor {
    name: "int16_3_2_4535_5000",
    input_stride: 1,
    output_stride: 2,
    subfilter_count: 3,
    subfilter_length: 88,
    block_in: 2,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q15(&SRC_INT16_3_2_4535_5000_FIR),
};

static SRC_INT16_3_2_4535_5000_FIR: [i16; 264] = [
    -2, 2, -2, 2, -1, -1, 4, -8, 14, -21,
    29, -39, 51, -63, 76, -90, 103, -114, 124, -131,
    133, -130, 121, -104, 78, -42, -5, 63, -134, 219,
    -316, 428, -553, 693, -848, 1019, -1208, 1421, -1667, 1964,
    -2352, 2932, -4027, 7520, 29961, -3086, 983, -198, -207, 444,
    -588, 673, -717, 730, -719, 692, -650, 599, -541, 479,
    -416, 352, -291, 233, -180, 131, -89, 53, -23, -2,
    20, -34, 43, -48, 50, -49, 46, -42, 37, -31,
    26, -20, 16, -12, 8, -5, 3, -2, -3, 5,
    -7, 9, -11, 12, -13, 14, -13, 11, -8, 2,
    7, -18, 32, -49, 69, -92, 118, -146, 175, -204,
    233, -259, 282, -299, 309, -309, 297, -271, 228, -166,
    81, 31, -174, 356, -585, 877, -1258, 1780, -2552, 3861,
    -6765, 20797, 20797, -6765, 3861, -2552, 1780, -1258, 877, -585,
    356, -174, 31, 81, -166, 228, -271, 297, -309, 309,
    -299, 282, -259, 233, -204, 175, -146, 118, -92, 69,
    -49, 32, -18, 7, 2, -8, 11, -13, 14, -13,
    12, -11, 9, -7, 5, -3, -2, 3, -5, 8,
    -12, 16, -20, 26, -31, 37, -42, 46, -49, 50,
    -48, 43, -34, 20, -2, -23, 53, -89, 131, -180,
    233, -291, 352, -416, 479, -541, 599, -650, 692, -719,
    730, -717, 673, -588, 444, -207, -198, 983, -3086, 29961,
    7520, -4027, 2932, -2352, 1964, -1667, 1421, -1208, 1019, -848,
    693, -553, 428, -316, 219, -134, 63, -5, -42, 78,
    -104, 121, -130, 133, -131, 124, -114, 103, -90, 76,
    -63, 51, -39, 29, -21, 14, -8, 4, -1, -1,
    2, -2, 2, -2,
];
