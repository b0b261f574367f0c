//! Designed polyphase stages with Q1.31 coefficients.
//!
//! Generated by tools/src_design.py. Do not edit by hand.

use crate::stage::{StageDescriptor, Taps};

pub static SRC_INT32_1_2_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_2268_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 40,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_2268_5000_FIR),
};

static SRC_INT32_1_2_2268_5000_FIR: [i32; 40] = [
    -48177, 364263, 901280, -22503, -2846548, -3718507,
    2203773, 11002743, 8434267, -12024571, -29614359, -11084517,
    40574623, 64137103, -382652, -114669616, -131508652, 73185114,
    441915479, 737007111, 737007111, 441915479, 73185114, -131508652,
    -114669616, -382652, 64137103, 40574623, -11084517, -29614359,
    -12024571, 8434267, 11002743, 2203773, -3718507, -2846548,
    -22503, 901280, 364263, -48177,
];

pub static SRC_INT32_1_2_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_2500_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 44,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_2500_5000_FIR),
};

static SRC_INT32_1_2_2500_5000_FIR: [i32; 44] = [
    30229, -320970, -645709, 271024, 2255586, 1999108,
    -2994628, -7648001, -2138854, 12516687, 16852787, -5239440,
    -34464611, -25313557, 32656783, 74369718, 19211790, -108163511,
    -147905871, 50866916, 439386250, 758098650, 758098650, 439386250,
    50866916, -147905871, -108163511, 19211790, 74369718, 32656783,
    -25313557, -34464611, -5239440, 16852787, 12516687, -2138854,
    -7648001, -2994628, 1999108, 2255586, 271024, -645709,
    -320970, 30229,
];

pub static SRC_INT32_1_2_2721_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_2721_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 48,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_2721_5000_FIR),
};

static SRC_INT32_1_2_2721_5000_FIR: [i32; 48] = [
    -30498, 267199, 503763, -289448, -1751391, -1165614,
    2767945, 5226212, -403336, -10252530, -8846257, 9793738,
    23900942, 5215826, -34234021, -38696646, 20386364, 79934036,
    38618551, -98019465, -161192887, 28727617, 435428780, 777912132,
    777912132, 435428780, 28727617, -161192887, -98019465, 38618551,
    79934036, 20386364, -38696646, -34234021, 5215826, 23900942,
    9793738, -8846257, -10252530, -403336, 5226212, 2767945,
    -1165614, -1751391, -289448, 503763, 267199, -30498,
];

pub static SRC_INT32_1_2_3401_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_3401_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 64,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_3401_5000_FIR),
};

static SRC_INT32_1_2_3401_5000_FIR: [i32; 64] = [
    -59355, 100221, 295363, -45092, -752532, -444256,
    1227104, 1690092, -1124199, -3706477, -472466, 5804345,
    4388196, -6376018, -10639452, 3142617, 17675594, 5996706,
    -21996703, -21665517, 18498242, 41698089, -1547259, -60298194,
    -33813193, 67640827, 92218269, -47743924, -186073998, -41928330,
    414827650, 837258366, 837258366, 414827650, -41928330, -186073998,
    -47743924, 92218269, 67640827, -33813193, -60298194, -1547259,
    41698089, 18498242, -21665517, -21996703, 5996706, 17675594,
    3142617, -10639452, -6376018, 4388196, 5804345, -472466,
    -3706477, -1124199, 1690092, 1227104, -444256, -752532,
    -45092, 295363, 100221, -59355,
];

pub static SRC_INT32_1_2_3887_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_3887_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 92,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_3887_5000_FIR),
};

static SRC_INT32_1_2_3887_5000_FIR: [i32; 92] = [
    34598, -60679, -123880, 74613, 290896, -4841,
    -527865, -230576, 776055, 712300, -909684, -1481480,
    737103, 2492114, -28399, -3566533, -1426765, 4370825,
    3735804, -4427136, -6808763, 3174531, 10275233, -79785,
    -13438154, -5213699, 15285980, 12723121, -14572438, -21980886,
    9953631, 31934650, -146891, -40901808, -15957156, 46541619,
    39355643, -45696263, -71460022, 33592710, 116087525, -195804,
    -188323551, -92319910, 393220343, 878238368, 878238368, 393220343,
    -92319910, -188323551, -195804, 116087525, 33592710, -71460022,
    -45696263, 39355643, 46541619, -15957156, -40901808, -146891,
    31934650, 9953631, -21980886, -14572438, 12723121, 15285980,
    -5213699, -13438154, -79785, 10275233, 3174531, -6808763,
    -4427136, 3735804, 4370825, -1426765, -3566533, -28399,
    2492114, 737103, -1481480, -909684, 712300, 776055,
    -230576, -527865, -4841, 290896, 74613, -123880,
    -60679, 34598,
];

pub static SRC_INT32_1_2_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_2_4535_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 220,
    block_in: 2,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_2_4535_5000_FIR),
};

static SRC_INT32_1_2_4535_5000_FIR: [i32; 220] = [
    11428, -18622, -21956, 24910, 37246, -29687,
    -57989, 31356, 84609, -27949, -117141, 17171,
    155099, 3521, -197353, -36806, 242008, 85340,
    -286321, -151566, 326642, 237492, -358398, -344434,
    376138, 472754, -373638, -621589, 344069, 788591,
    -280239, -969698, 174911, 1158941, -21180, -1348326,
    -187088, 1527781, 454772, -1685209, -784982, 1806635,
    1178530, -1876478, -1633424, 1877937, 2144388, -1793495,
    -2702453, 1605536, 3294629, -1297062, -3903691, 852493,
    4508098, -258524, -5082055, -494983, 5595733, 1414102,
    -6015654, -2499978, 6305221, 3748027, -6425395, -5147214,
    6335485, 6679458, -5994018, -8319166, 5359648, 10032904,
    -4392032, -11779205, 3052615, 13508480, -1305230, -15162974,
    -883614, 16676686, 3544896, -17975092, -6707910, 18974424,
    10402070, -19580144, -14660187, 19683935, 19524026, -19158117,
    -25053617, 17845435, 31343101, -15540229, -38548736, 11952691,
    46941378, -6637328, -57012879, -1161911, 69715476, 12886795,
    -87082006, -31734194, 114195884, 66578645, -167909492, -154724136,
    355295646, 930694820, 930694820, 355295646, -154724136, -167909492,
    66578645, 114195884, -31734194, -87082006, 12886795, 69715476,
    -1161911, -57012879, -6637328, 46941378, 11952691, -38548736,
    -15540229, 31343101, 17845435, -25053617, -19158117, 19524026,
    19683935, -14660187, -19580144, 10402070, 18974424, -6707910,
    -17975092, 3544896, 16676686, -883614, -15162974, -1305230,
    13508480, 3052615, -11779205, -4392032, 10032904, 5359648,
    -8319166, -5994018, 6679458, 6335485, -5147214, -6425395,
    3748027, 6305221, -2499978, -6015654, 1414102, 5595733,
    -494983, -5082055, -258524, 4508098, 852493, -3903691,
    -1297062, 3294629, 1605536, -2702453, -1793495, 2144388,
    1877937, -1633424, -1876478, 1178530, 1806635, -784982,
    -1685209, 454772, 1527781, -187088, -1348326, -21180,
    1158941, 174911, -969698, -280239, 788591, 344069,
    -621589, -373638, 472754, 376138, -344434, -358398,
    237492, 326642, -151566, -286321, 85340, 242008,
    -36806, -197353, 3521, 155099, 17171, -117141,
    -27949, 84609, 31356, -57989, -29687, 37246,
    24910, -21956, -18622, 11428,
];

pub static SRC_INT32_1_3_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_3_2268_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 60,
    block_in: 3,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_3_2268_5000_FIR),
};

static SRC_INT32_1_3_2268_5000_FIR: [i32; 60] = [
    -43536, 60090, 317234, 575195, 484060, -270291,
    -1568323, -2607550, -2172069, 495755, 4674789, 7852770,
    6807556, -101781, -10743845, -18969148, -17410362, -2499982,
    21162322, 40585177, 40070669, 11025702, -39268216, -85929695,
    -94902375, -39088712, 85406185, 251984233, 410601713, 507279578,
    507279578, 410601713, 251984233, 85406185, -39088712, -94902375,
    -85929695, -39268216, 11025702, 40070669, 40585177, 21162322,
    -2499982, -17410362, -18969148, -10743845, -101781, 6807556,
    7852770, 4674789, 495755, -2172069, -2607550, -1568323,
    -270291, 484060, 575195, 317234, 60090, -43536,
];

pub static SRC_INT32_1_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_3_4535_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 328,
    block_in: 3,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_3_4535_5000_FIR),
};

static SRC_INT32_1_3_4535_5000_FIR: [i32; 328] = [
    -1315, -13080, -14845, -773, 19019, 24629,
    5557, -24905, -37434, -14021, 29834, 53285,
    27200, -32609, -71911, -46099, 31744, 92673,
    71606, -25488, -114494, -104386, 11883, 135810,
    144758, 11163, -154528, -192571, -45762, 168029,
    247082, 93907, -173183, -306832, -157311, 166421,
    369550, 237221, -143838, -432075, -334222, 101337,
    490318, 448030, -34827, -539265, -577296, -59549,
    573033, 719419, 185142, -584984, -870401, -344507,
    567897, 1024725, 539085, -514212, -1175305, -768887,
    416329, 1313489, 1032189, -266960, -1429143, -1325248,
    59541, 1510812, 1642061, 211330, -1545973, -1974185,
    -549421, 1521369, 2310624, 956402, -1423422, -2637815,
    -1431376, 1238736, 2939691, 1970456, -954641, -3197865,
    -2566383, 559809, 3391912, 3208222, -44879, -3499751,
    -3881132, -596895, 3498130, 4566242, 1369018, -3363181,
    -5240626, -2271158, 3071045, 5877383, 3298615, -2598524,
    -6445814, -4441864, 1923745, 6911671, 5686181, -1026782,
    -7237463, -7011378, -109796, 7382751, 8391619, 1500508,
    -7304387, -9795315, -3156736, 6956577, 11185050, 5086763,
    -6290650, -12517478, -7296181, 5254303, 13743057, 9788817,
    -3790012, -14805458, -12568376, 1832069, 15640300, 15641199,
    698645, -16172671, -19020759, -3903794, 16312405, 22735142,
    7923754, -15945110, -26839994, -12967253, 14914761, 31442340,
    19368816, -12988280, -36748121, -27709175, 9777735, 43167574,
    39096241, -4549121, -51583912, -55927372, -4332715, 64188537,
    84479986, 21498050, -88045851, -147861918, -67437389, 164316468,
    454355591, 654516684, 654516684, 454355591, 164316468, -67437389,
    -147861918, -88045851, 21498050, 84479986, 64188537, -4332715,
    -55927372, -51583912, -4549121, 39096241, 43167574, 9777735,
    -27709175, -36748121, -12988280, 19368816, 31442340, 14914761,
    -12967253, -26839994, -15945110, 7923754, 22735142, 16312405,
    -3903794, -19020759, -16172671, 698645, 15641199, 15640300,
    1832069, -12568376, -14805458, -3790012, 9788817, 13743057,
    5254303, -7296181, -12517478, -6290650, 5086763, 11185050,
    6956577, -3156736, -9795315, -7304387, 1500508, 8391619,
    7382751, -109796, -7011378, -7237463, -1026782, 5686181,
    6911671, 1923745, -4441864, -6445814, -2598524, 3298615,
    5877383, 3071045, -2271158, -5240626, -3363181, 1369018,
    4566242, 3498130, -596895, -3881132, -3499751, -44879,
    3208222, 3391912, 559809, -2566383, -3197865, -954641,
    1970456, 2939691, 1238736, -1431376, -2637815, -1423422,
    956402, 2310624, 1521369, -549421, -1974185, -1545973,
    211330, 1642061, 1510812, 59541, -1325248, -1429143,
    -266960, 1032189, 1313489, 416329, -768887, -1175305,
    -514212, 539085, 1024725, 567897, -344507, -870401,
    -584984, 185142, 719419, 573033, -59549, -577296,
    -539265, -34827, 448030, 490318, 101337, -334222,
    -432075, -143838, 237221, 369550, 166421, -157311,
    -306832, -173183, 93907, 247082, 168029, -45762,
    -192571, -154528, 11163, 144758, 135810, 11883,
    -104386, -114494, -25488, 71606, 92673, 31744,
    -46099, -71911, -32609, 27200, 53285, 29834,
    -14021, -37434, -24905, 5557, 24629, 19019,
    -773, -14845, -13080, -1315,
];

pub static SRC_INT32_1_4_1512_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_4_1512_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 60,
    block_in: 4,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_4_1512_5000_FIR),
};

static SRC_INT32_1_4_1512_5000_FIR: [i32; 60] = [
    56831, 184213, 362539, 495498, 418231, -48115,
    -993686, -2300273, -3562183, -4112735, -3198747, -291511,
    4547648, 10389037, 15403455, 17193036, 13490218, 3086067,
    -13282718, -32421870, -48829914, -55635721, -46206803, -16064785,
    35421611, 104110642, 181311890, 255240440, 313421001, 345459962,
    345459962, 313421001, 255240440, 181311890, 104110642, 35421611,
    -16064785, -46206803, -55635721, -48829914, -32421870, -13282718,
    3086067, 13490218, 17193036, 15403455, 10389037, 4547648,
    -291511, -3198747, -4112735, -3562183, -2300273, -993686,
    -48115, 418231, 495498, 362539, 184213, 56831,
];

pub static SRC_INT32_1_4_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_4_2268_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 76,
    block_in: 4,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_4_2268_5000_FIR),
};

static SRC_INT32_1_4_2268_5000_FIR: [i32; 76] = [
    38909, 119196, 211827, 245758, 129543, -198231,
    -705581, -1224063, -1463699, -1107670, 27002, 1819608,
    3753453, 4983571, 4598232, 2024244, -2563018, -8016422,
    -12351545, -13303090, -9199107, 122910, 12734300, 24711190,
    31066802, 27384156, 11704854, -13971681, -43218701, -66135048,
    -71677425, -50838535, 234927, 78195624, 172301584, 266338715,
    342273255, 384677201, 384677201, 342273255, 266338715, 172301584,
    78195624, 234927, -50838535, -71677425, -66135048, -43218701,
    -13971681, 11704854, 27384156, 31066802, 24711190, 12734300,
    122910, -9199107, -13303090, -12351545, -8016422, -2563018,
    2024244, 4598232, 4983571, 3753453, 1819608, 27002,
    -1107670, -1463699, -1224063, -705581, -198231, 129543,
    245758, 211827, 119196, 38909,
];

pub static SRC_INT32_1_4_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_4_4535_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 436,
    block_in: 4,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_4_4535_5000_FIR),
};

static SRC_INT32_1_4_4535_5000_FIR: [i32; 436] = [
    -4174, -9731, -10767, -5316, 4901, 14672,
    17801, 10816, -4242, -19918, -26848, -19129,
    1407, 24871, 37835, 30792, 4514, -28698,
    -50459, -46233, -14511, 30333, 64138, 65704,
    29599, -28479, -77966, -89202, -50748, 21640,
    90680, 116390, 78793, -8174, -100651, -146522,
    -114335, -13642, 105880, 178377, 157633, 45508,
    -104038, -210200, -208486, -88986, 92523, 239677,
    266126, 145365, -68550, -263924, -329110, -215505,
    29273, 279516, 395235, 299682, 28061, -282550,
    -461474, -397420, -105934, 268746, 523945, 507340,
    206354, -233598, -577920, -627022, -330634, 172555,
    617877, 752887, 479170, -81246, -637609, -880128,
    -651213, -44258, 630374, 1002672, 844663, 207161,
    -589115, -1113210, -1055878, -409639, 506717, 1203274,
    1279532, 652531, -376324, -1263389, -1508513, -935038,
    191686, 1283287, 1733881, 1254437, 52455, -1252193,
    -1944905, -1605838, -359967, 1159165, 2129155, 1981981,
    732921, -993495, -2272693, -2373093, -1171193, 745159,
    2360325, 2766822, 1672100, -405286, -2375935, -3148243,
    -2230067, -33337, 2302887, 3499942, 2836355, 575779,
    -2124477, -3802193, -3478850, -1224481, 1824424, 4033192,
    4141929, 1978818, -1387379, -4169369, -4806396, -2834707,
    799433, 4185727, 5449490, 3784277, -48590, -4056212,
    -6044944, -4815624, -874826, 3754039, 6563079, 5912625,
    1977856, -3251959, -6970875, -7054839, -3264730, 2522368,
    7231971, 8217445, 4736874, -1537178, -7306483, -9371200,
    -6393156, 267298, 7150498, 10482338, 8230466, 1318476,
    -6714994, -11512304, -10244735, -3255523, 5943809, 12417137,
    12432610, 5586973, -4769973, -13146159, -14794144, -8369845,
    3109171, 13639371, 17337183, 11685737, -847985, -13822369,
    -20084825, -15660120, -2178032, 13596276, 23088947, 20499159,
    6227487, -12816997, -26456892, -26565706, -11744962, 11249192,
    30410064, 34553489, 19579206, -8452179, -35431959, -45948863,
    -31589490, 3445443, 42723310, 64546586, 52783724, 6571907,
    -56110894, -103559606, -102785599, -34333412, 97039594, 260974868,
    410769634, 500018430, 500018430, 410769634, 260974868, 97039594,
    -34333412, -102785599, -103559606, -56110894, 6571907, 52783724,
    64546586, 42723310, 3445443, -31589490, -45948863, -35431959,
    -8452179, 19579206, 34553489, 30410064, 11249192, -11744962,
    -26565706, -26456892, -12816997, 6227487, 20499159, 23088947,
    13596276, -2178032, -15660120, -20084825, -13822369, -847985,
    11685737, 17337183, 13639371, 3109171, -8369845, -14794144,
    -13146159, -4769973, 5586973, 12432610, 12417137, 5943809,
    -3255523, -10244735, -11512304, -6714994, 1318476, 8230466,
    10482338, 7150498, 267298, -6393156, -9371200, -7306483,
    -1537178, 4736874, 8217445, 7231971, 2522368, -3264730,
    -7054839, -6970875, -3251959, 1977856, 5912625, 6563079,
    3754039, -874826, -4815624, -6044944, -4056212, -48590,
    3784277, 5449490, 4185727, 799433, -2834707, -4806396,
    -4169369, -1387379, 1978818, 4141929, 4033192, 1824424,
    -1224481, -3478850, -3802193, -2124477, 575779, 2836355,
    3499942, 2302887, -33337, -2230067, -3148243, -2375935,
    -405286, 1672100, 2766822, 2360325, 745159, -1171193,
    -2373093, -2272693, -993495, 732921, 1981981, 2129155,
    1159165, -359967, -1605838, -1944905, -1252193, 52455,
    1254437, 1733881, 1283287, 191686, -935038, -1508513,
    -1263389, -376324, 652531, 1279532, 1203274, 506717,
    -409639, -1055878, -1113210, -589115, 207161, 844663,
    1002672, 630374, -44258, -651213, -880128, -637609,
    -81246, 479170, 752887, 617877, 172555, -330634,
    -627022, -577920, -233598, 206354, 507340, 523945,
    268746, -105934, -397420, -461474, -282550, 28061,
    299682, 395235, 279516, 29273, -215505, -329110,
    -263924, -68550, 145365, 266126, 239677, 92523,
    -88986, -208486, -210200, -104038, 45508, 157633,
    178377, 105880, -13642, -114335, -146522, -100651,
    -8174, 78793, 116390, 90680, 21640, -50748,
    -89202, -77966, -28479, 29599, 65704, 64138,
    30333, -14511, -46233, -50459, -28698, 4514,
    30792, 37835, 24871, 1407, -19129, -26848,
    -19918, -4242, 10816, 17801, 14672, 4901,
    -5316, -10767, -9731, -4174,
];

pub static SRC_INT32_1_6_1134_5000: StageDescriptor = StageDescriptor {
    name: "int32_1_6_1134_5000",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 80,
    block_in: 6,
    block_out: 1,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_1_6_1134_5000_FIR),
};

static SRC_INT32_1_6_1134_5000_FIR: [i32; 80] = [
    7876, -23718, -95913, -217402, -386219, -584209,
    -773298, -895245, -876301, -637564, -110748, 742178,
    1908350, 3306305, 4775712, 6078831, 6916927, 6962916,
    5908939, 3524583, -281269, -5404124, -11503197, -17985912,
    -24024923, -28611250, -30642281, -29038012, -22873883, -11514667,
    5268176, 27212924, 53532163, 82934716, 113707214, 143849922,
    171253961, 193901008, 210062773, 218476708, 218476708, 210062773,
    193901008, 171253961, 143849922, 113707214, 82934716, 53532163,
    27212924, 5268176, -11514667, -22873883, -29038012, -30642281,
    -28611250, -24024923, -17985912, -11503197, -5404124, -281269,
    3524583, 5908939, 6962916, 6916927, 6078831, 4775712,
    3306305, 1908350, 742178, -110748, -637564, -876301,
    -895245, -773298, -584209, -386219, -217402, -95913,
    -23718, 7876,
];

pub static SRC_INT32_2_1_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_1_2268_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 20,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_1_2268_5000_FIR),
};

static SRC_INT32_2_1_2268_5000_FIR: [i32; 40] = [
    -96355, 1802559, -5693097, 4407546, 16868534, -59228719,
    81149247, -765305, -263017304, 883830959, 1474014221, 146370229,
    -229339232, 128274206, -22169033, -24049142, 22005486, -7437014,
    -45006, 728526, 728526, -45006, -7437014, 22005486,
    -24049142, -22169033, 128274206, -229339232, 146370229, 1474014221,
    883830959, -263017304, -765305, 81149247, -59228719, 16868534,
    4407546, -5693097, 1802559, -96355,
];

pub static SRC_INT32_2_1_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_1_2500_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 24,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_1_2500_5000_FIR),
};

static SRC_INT32_2_1_2500_5000_FIR: [i32; 48] = [
    150743, 242918, -2923741, 7824234, -8796095, -5593715,
    40472860, -77655073, 70173267, 39897707, -300281273, 881174794,
    1516656466, 102511000, -221796829, 156863559, -55598245, -12159923,
    31270468, -21097566, 6328967, 1054624, -1803924, 628557,
    628557, -1803924, 1054624, 6328967, -21097566, 31270468,
    -12159923, -55598245, 156863559, -221796829, 102511000, 1516656466,
    881174794, -300281273, 39897707, 70173267, -77655073, 40472860,
    -5593715, -8796095, 7824234, -2923741, 242918, 150743,
];

pub static SRC_INT32_2_1_2721_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_1_2721_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 24,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_1_2721_5000_FIR),
};

static SRC_INT32_2_1_2721_5000_FIR: [i32; 48] = [
    -60997, 1007526, -3502782, 5535889, -806673, -17692514,
    47801884, -68468043, 40772728, 77237102, -322385775, 870857560,
    1555824264, 57455235, -196038931, 159868072, -77393292, 10431651,
    19587477, -20505060, 10452424, -2331227, -578896, 534398,
    534398, -578896, -2331227, 10452424, -20505060, 19587477,
    10431651, -77393292, 159868072, -196038931, 57455235, 1555824264,
    870857560, -322385775, 77237102, 40772728, -68468043, 47801884,
    -17692514, -806673, 5535889, -3502782, 1007526, -60997,
];

pub static SRC_INT32_2_1_3401_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_1_3401_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 32,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_1_3401_5000_FIR),
};

static SRC_INT32_2_1_3401_5000_FIR: [i32; 64] = [
    -118711, 590726, -1505065, 2454207, -2248398, -944933,
    8776393, -21278905, 35351189, -43993407, 36996484, -3094518,
    -67626386, 184436539, -372147995, 829655299, 1674516733, -83856659,
    -95487848, 135281654, -120596389, 83396179, -43331035, 11993412,
    6285234, -12752036, 11608690, -7412954, 3380184, -888511,
    -90184, 200442, 200442, -90184, -888511, 3380184,
    -7412954, 11608690, -12752036, 6285234, 11993412, -43331035,
    83396179, -120596389, 135281654, -95487848, -83856659, 1674516733,
    829655299, -372147995, 184436539, -67626386, -3094518, 36996484,
    -43993407, 35351189, -21278905, 8776393, -944933, -2248398,
    2454207, -1505065, 590726, -118711,
];

pub static SRC_INT32_2_1_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_1_4535_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 112,
    block_in: 1,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_1_4535_5000_FIR),
};

static SRC_INT32_2_1_4535_5000_FIR: [i32; 224] = [
    -17788, 36062, -63536, 101850, -152238, 215295,
    -290720, 377058, -471464, 569487, -664922, 749727,
    -814036, 846283, -833457, 761483, -615748, 381764,
    -45944, -403499, 975587, -1675560, 2503853, -3455110,
    4517289, -5670895, 6888401, -8133893, 9362977, -10522975,
    11553434, -12386931, 12950188, -13165432, 12951983, -12227972,
    10912114, -8925413, 6192660, -2643533, -1786904, 7158633,
    -13528430, 20953568, -29498444, 39245755, -50315169, 62895029,
    -77298374, 94067867, -114188550, 139566550, -174269423, 228466022,
    -335863163, 710608455, 1861394635, -309469038, 133186258, -63497224,
    25793639, -2326585, -13297070, 23959825, -31172364, 35823955,
    -38492277, 39586594, -39419349, 38243914, -36275121, 33700516,
    -30686442, 27381152, -23916281, 20407405, -16954203, 13640505,
    -10534419, 7688655, -5141103, 2915676, -1023429, -536106,
    1773382, -2707180, 3362874, -3770692, 3964019, -3977808,
    3847141, -3605967, 3286060, -2916197, 2521567, -2123409,
    1738860, -1380986, 1058990, -778536, 542181, -349868,
    199456, -87243, 8483, 42158, -70191, 80968,
    -79424, 69891, -55981, 40545, 40545, -55981,
    69891, -79424, 80968, -70191, 42158, 8483,
    -87243, 199456, -349868, 542181, -778536, 1058990,
    -1380986, 1738860, -2123409, 2521567, -2916197, 3286060,
    -3605967, 3847141, -3977808, 3964019, -3770692, 3362874,
    -2707180, 1773382, -536106, -1023429, 2915676, -5141103,
    7688655, -10534419, 13640505, -16954203, 20407405, -23916281,
    27381152, -30686442, 33700516, -36275121, 38243914, -39419349,
    39586594, -38492277, 35823955, -31172364, 23959825, -13297070,
    -2326585, 25793639, -63497224, 133186258, -309469038, 1861394635,
    710608455, -335863163, 228466022, -174269423, 139566550, -114188550,
    94067867, -77298374, 62895029, -50315169, 39245755, -29498444,
    20953568, -13528430, 7158633, -1786904, -2643533, 6192660,
    -8925413, 10912114, -12227972, 12951983, -13165432, 12950188,
    -12386931, 11553434, -10522975, 9362977, -8133893, 6888401,
    -5670895, 4517289, -3455110, 2503853, -1675560, 975587,
    -403499, -45944, 381764, -615748, 761483, -833457,
    846283, -814036, 749727, -664922, 569487, -471464,
    377058, -290720, 215295, -152238, 101850, -63536,
    36062, -17788,
];

pub static SRC_INT32_2_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_2_3_4535_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 2,
    subfilter_length: 164,
    block_in: 3,
    block_out: 2,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_2_3_4535_5000_FIR),
};

static SRC_INT32_2_3_4535_5000_FIR: [i32; 328] = [
    -2631, -29690, 38037, 11114, -74869, 59668,
    54400, -143822, 63487, 143212, -228989, 23766,
    289515, -309057, -91524, 494164, -346365, -314621,
    739099, -287675, -668444, 980636, -69653, -1154591,
    1146067, 370285, -1740802, 1135793, 1078169, -2350611,
    832658, 2064379, -2858286, 119081, 3284123, -3091947,
    -1098843, 4621249, -2846845, -2862752, 5879381, -1909283,
    -5132767, 6783823, -89758, -7762264, 6996261, 2738035,
    -10481252, 6142089, 6597230, -12891628, 3847490, 11372362,
    -14474925, -219592, 16783238, -14608773, -6313473, 22370101,
    -12581300, -14592363, 27486114, -7580024, -25136753, 31280600,
    1397290, -38041518, 32624811, 15847509, -53679988, 29829522,
    38737632, -73496241, 19555470, 78192483, -103167824, -8665429,
    168959971, -176091702, -134874777, 908711182, 1309033369, 328632936,
    -295723836, 42996099, 128377074, -111854743, -9098243, 86335147,
    -55418351, -25976560, 62884680, -25934505, -31890219, 45470284,
    -7807588, -32345343, 31282399, 3664139, -29610916, 19577634,
    10508607, -25034956, 10173525, 13913154, -19590629, 3001017,
    14765502, -14022756, -2053564, 13823342, -8883727, -5197048,
    11754767, -4542315, -6726363, 9132484, -1193791, -6999503,
    6416445, 1119618, -6395729, 3940912, 2477471, -5275630,
    1912804, 3042737, -3948369, 422659, 3021624, -2650497,
    -533920, 2626979, -1537774, -1028425, 2049451, -689014,
    -1169967, 1438839, -119098, -1078531, 896060, 202673,
    -864150, 474442, 332842, -613664, 187814, 336057,
    -385142, 22327, 271620, -208772, -50977, 185346,
    -92197, -65218, 106571, -28043, -49810, 49258,
    -1547, -26159, -26159, -1547, 49258, -49810,
    -28043, 106571, -65218, -92197, 185346, -50977,
    -208772, 271620, 22327, -385142, 336057, 187814,
    -613664, 332842, 474442, -864150, 202673, 896060,
    -1078531, -119098, 1438839, -1169967, -689014, 2049451,
    -1028425, -1537774, 2626979, -533920, -2650497, 3021624,
    422659, -3948369, 3042737, 1912804, -5275630, 2477471,
    3940912, -6395729, 1119618, 6416445, -6999503, -1193791,
    9132484, -6726363, -4542315, 11754767, -5197048, -8883727,
    13823342, -2053564, -14022756, 14765502, 3001017, -19590629,
    13913154, 10173525, -25034956, 10508607, 19577634, -29610916,
    3664139, 31282399, -32345343, -7807588, 45470284, -31890219,
    -25934505, 62884680, -25976560, -55418351, 86335147, -9098243,
    -111854743, 128377074, 42996099, -295723836, 328632936, 1309033369,
    908711182, -134874777, -176091702, 168959971, -8665429, -103167824,
    78192483, 19555470, -73496241, 38737632, 29829522, -53679988,
    15847509, 32624811, -38041518, 1397290, 31280600, -25136753,
    -7580024, 27486114, -14592363, -12581300, 22370101, -6313473,
    -14608773, 16783238, -219592, -14474925, 11372362, 3847490,
    -12891628, 6597230, 6142089, -10481252, 2738035, 6996261,
    -7762264, -89758, 6783823, -5132767, -1909283, 5879381,
    -2862752, -2846845, 4621249, -1098843, -3091947, 3284123,
    119081, -2858286, 2064379, 832658, -2350611, 1078169,
    1135793, -1740802, 370285, 1146067, -1154591, -69653,
    980636, -668444, -287675, 739099, -314621, -346365,
    494164, -91524, -309057, 289515, 23766, -228989,
    143212, 63487, -143822, 54400, 59668, -74869,
    11114, 38037, -29690, -2631,
];

pub static SRC_INT32_3_1_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_3_1_2268_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 3,
    subfilter_length: 20,
    block_in: 1,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_3_1_2268_5000_FIR),
};

static SRC_INT32_3_1_2268_5000_FIR: [i32; 60] = [
    -130608, 1725585, -4704970, 1487264, 20422668, -56907444,
    63486966, 33077107, -284707126, 755952698, 1521838735, 256218555,
    -257789086, 120212008, -7499946, -32231535, 23558309, -6516208,
    -810873, 951703, 180270, 1452179, -7822649, 14024368,
    -305343, -52231086, 121755531, -117804648, -117266135, 1231805138,
    1231805138, -117266135, -117804648, 121755531, -52231086, -305343,
    14024368, -7822649, 1452179, 180270, 951703, -810873,
    -6516208, 23558309, -32231535, -7499946, 120212008, -257789086,
    256218555, 1521838735, 755952698, -284707126, 33077107, 63486966,
    -56907444, 20422668, 1487264, -4704970, 1725585, -130608,
];

pub static SRC_INT32_3_1_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_3_1_4535_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 3,
    subfilter_length: 112,
    block_in: 1,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_3_1_4535_5000_FIR),
};

static SRC_INT32_3_1_4535_5000_FIR: [i32; 336] = [
    -24261, 45214, -74854, 114167, -163565, 222668,
    -290076, 363158, -437873, 508639, -568277, 608037,
    -617725, 585954, -500511, 348849, -118712, -201144,
    620130, -1144931, 1778592, -2519595, 3360990, -4289618,
    5285470, -6321232, 7362052, -8365569, 9282227, -10055885,
    10624732, -10922489, 10879872, -10426275, 9491603, -8008189,
    5912696, -3147893, -335817, 4579266, -9613978, 15462408,
    -22139295, 29654517, -38018132, 47248686, -57386738, 68517299,
    -80808632, 94583652, -110462431, 129678244, -154883461, 192655050,
    -264188875, 492969184, 1963553204, -202328079, 64511655, -13005688,
    -13661095, 29378662, -39051038, 44878297, -48021898, 49178458,
    -48813278, 47266756, -44806744, 41655587, -38004417, 34020684,
    -29852010, 25628028, -21461169, 17446964, -13664221, 10175269,
    -7026410, 4248622, -1858553, -140231, 1755757, -3005975,
    3916969, -4521102, 4855168, -4958616, 4871883, -4634904,
    4285825, -3859940, 3388882, -2900048, 2416281, -1955755,
    1532081, -1154562, 828602, -556198, 336511, -166455,
    41293, 44801, -98230, 125527, -132986, 126381,
    -110764, 90346, -68446, 47508, 10688, -7193,
    -3777, 25203, -60283, 112236, -184056, 278211,
    -396305, 538719, -704232, 889665, -1089555, 1295893,
    -1497949, 1682211, -1832464, 1930029, -1954164, 1882660,
    -1692606, 1361333, -867508, 192358, 679014, -1756265,
    3042451, -4532718, 6213104, -8059504, 10036855, -12098567,
    14186248, -16229725, 18147362, -19846651, 21225000, -22170645,
    22563530, -22275962, 21172739, -19110347, 15934589, -11475681,
    5539236, 2109557, -11773462, 23871803, -39029478, 58249372,
    -83273601, 117426445, -167901121, 253531573, -443643440, 1363086461,
    1363086461, -443643440, 253531573, -167901121, 117426445, -83273601,
    58249372, -39029478, 23871803, -11773462, 2109557, 5539236,
    -11475681, 15934589, -19110347, 21172739, -22275962, 22563530,
    -22170645, 21225000, -19846651, 18147362, -16229725, 14186248,
    -12098567, 10036855, -8059504, 6213104, -4532718, 3042451,
    -1756265, 679014, 192358, -867508, 1361333, -1692606,
    1882660, -1954164, 1930029, -1832464, 1682211, -1497949,
    1295893, -1089555, 889665, -704232, 538719, -396305,
    278211, -184056, 112236, -60283, 25203, -3777,
    -7193, 10688, 47508, -68446, 90346, -110764,
    126381, -132986, 125527, -98230, 44801, 41293,
    -166455, 336511, -556198, 828602, -1154562, 1532081,
    -1955755, 2416281, -2900048, 3388882, -3859940, 4285825,
    -4634904, 4871883, -4958616, 4855168, -4521102, 3916969,
    -3005975, 1755757, -140231, -1858553, 4248622, -7026410,
    10175269, -13664221, 17446964, -21461169, 25628028, -29852010,
    34020684, -38004417, 41655587, -44806744, 47266756, -48813278,
    49178458, -48021898, 44878297, -39051038, 29378662, -13661095,
    -13005688, 64511655, -202328079, 1963553204, 492969184, -264188875,
    192655050, -154883461, 129678244, -110462431, 94583652, -80808632,
    68517299, -57386738, 47248686, -38018132, 29654517, -22139295,
    15462408, -9613978, 4579266, -335817, -3147893, 5912696,
    -8008189, 9491603, -10426275, 10879872, -10922489, 10624732,
    -10055885, 9282227, -8365569, 7362052, -6321232, 5285470,
    -4289618, 3360990, -2519595, 1778592, -1144931, 620130,
    -201144, -118712, 348849, -500511, 585954, -617725,
    608037, -568277, 508639, -437873, 363158, -290076,
    222668, -163565, 114167, -74854, 45214, -24261,
];

pub static SRC_INT32_3_2_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_3_2_4535_5000",
    input_stride: 1,
    output_stride: 2,
    subfilter_count: 3,
    subfilter_length: 112,
    block_in: 2,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_3_2_4535_5000_FIR),
};

static SRC_INT32_3_2_4535_5000_FIR: [i32; 336] = [
    -24261, 45214, -74854, 114167, -163565, 222668,
    -290076, 363158, -437873, 508639, -568277, 608037,
    -617725, 585954, -500511, 348849, -118712, -201144,
    620130, -1144931, 1778592, -2519595, 3360990, -4289618,
    5285470, -6321232, 7362052, -8365569, 9282227, -10055885,
    10624732, -10922489, 10879872, -10426275, 9491603, -8008189,
    5912696, -3147893, -335817, 4579266, -9613978, 15462408,
    -22139295, 29654517, -38018132, 47248686, -57386738, 68517299,
    -80808632, 94583652, -110462431, 129678244, -154883461, 192655050,
    -264188875, 492969184, 1963553204, -202328079, 64511655, -13005688,
    -13661095, 29378662, -39051038, 44878297, -48021898, 49178458,
    -48813278, 47266756, -44806744, 41655587, -38004417, 34020684,
    -29852010, 25628028, -21461169, 17446964, -13664221, 10175269,
    -7026410, 4248622, -1858553, -140231, 1755757, -3005975,
    3916969, -4521102, 4855168, -4958616, 4871883, -4634904,
    4285825, -3859940, 3388882, -2900048, 2416281, -1955755,
    1532081, -1154562, 828602, -556198, 336511, -166455,
    41293, 44801, -98230, 125527, -132986, 126381,
    -110764, 90346, -68446, 47508, 10688, -7193,
    -3777, 25203, -60283, 112236, -184056, 278211,
    -396305, 538719, -704232, 889665, -1089555, 1295893,
    -1497949, 1682211, -1832464, 1930029, -1954164, 1882660,
    -1692606, 1361333, -867508, 192358, 679014, -1756265,
    3042451, -4532718, 6213104, -8059504, 10036855, -12098567,
    14186248, -16229725, 18147362, -19846651, 21225000, -22170645,
    22563530, -22275962, 21172739, -19110347, 15934589, -11475681,
    5539236, 2109557, -11773462, 23871803, -39029478, 58249372,
    -83273601, 117426445, -167901121, 253531573, -443643440, 1363086461,
    1363086461, -443643440, 253531573, -167901121, 117426445, -83273601,
    58249372, -39029478, 23871803, -11773462, 2109557, 5539236,
    -11475681, 15934589, -19110347, 21172739, -22275962, 22563530,
    -22170645, 21225000, -19846651, 18147362, -16229725, 14186248,
    -12098567, 10036855, -8059504, 6213104, -4532718, 3042451,
    -1756265, 679014, 192358, -867508, 1361333, -1692606,
    1882660, -1954164, 1930029, -1832464, 1682211, -1497949,
    1295893, -1089555, 889665, -704232, 538719, -396305,
    278211, -184056, 112236, -60283, 25203, -3777,
    -7193, 10688, 47508, -68446, 90346, -110764,
    126381, -132986, 125527, -98230, 44801, 41293,
    -166455, 336511, -556198, 828602, -1154562, 1532081,
    -1955755, 2416281, -2900048, 3388882, -3859940, 4285825,
    -4634904, 4871883, -4958616, 4855168, -4521102, 3916969,
    -3005975, 1755757, -140231, -1858553, 4248622, -7026410,
    10175269, -13664221, 17446964, -21461169, 25628028, -29852010,
    34020684, -38004417, 41655587, -44806744, 47266756, -48813278,
    49178458, -48021898, 44878297, -39051038, 29378662, -13661095,
    -13005688, 64511655, -202328079, 1963553204, 492969184, -264188875,
    192655050, -154883461, 129678244, -110462431, 94583652, -80808632,
    68517299, -57386738, 47248686, -38018132, 29654517, -22139295,
    15462408, -9613978, 4579266, -335817, -3147893, 5912696,
    -8008189, 9491603, -10426275, 10879872, -10922489, 10624732,
    -10055885, 9282227, -8365569, 7362052, -6321232, 5285470,
    -4289618, 3360990, -2519595, 1778592, -1144931, 620130,
    -201144, -118712, 348849, -500511, 585954, -617725,
    608037, -568277, 508639, -437873, 363158, -290076,
    222668, -163565, 114167, -74854, 45214, -24261,
];

pub static SRC_INT32_3_4_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_3_4_4535_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 3,
    subfilter_length: 148,
    block_in: 4,
    block_out: 3,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_3_4_4535_5000_FIR),
};

static SRC_INT32_3_4_4535_5000_FIR: [i32; 444] = [
    15567, 10214, -49227, 63298, -17535, -76492,
    147297, -109269, -54218, 241520, -282519, 77427,
    278718, -512987, 367232, 156488, -711269, 811711,
    -230581, -720307, 1313214, -933586, -348193, 1659348,
    -1881394, 559271, 1546563, -2829439, 2018901, 661099,
    -3358067, 3814403, -1189258, -2946165, 5447776, -3923722,
    -1125043, 6179228, -7068896, 2312493, 5177953, -9729024,
    7102621, 1772492, -10690155, 12372344, -4249002, -8668059,
    16638852, -12367243, -2663721, 17980082, -21172459, 7652317,
    14355027, -28370156, 21626342, 3984050, -30930303, 37459360,
    -14379189, -25213863, 52194828, -41589296, -6549926, 61617481,
    -79492273, 33786861, 58787385, -137926687, 128216736, 19719651,
    -308382525, 782938097, 1500056324, 291128618, -310715028, 158390615,
    10340789, -106366478, 103758660, -35280024, -38515052, 69412487,
    -47102109, -2551927, 41070663, -44576712, 16846095, 17935600,
    -34766901, 24877437, 808687, -22126898, 24911708, -9908212,
    -9881018, 19966458, -14669370, -148219, 12786461, -14704686,
    6063608, 5599811, -11690650, 8736906, -102885, -7347327,
    8574017, -3637321, -3092522, 6643453, -5023146, 164513,
    4035774, -4757721, 2064228, 1608019, -3544371, 2698690,
    -141920, -2052455, 2433342, -1073173, -761631, 1716427,
    -1308509, 92888, 930526, -1102299, 490048, 314093,
    -718962, 543565, -47460, -353559, 413222, -182313,
    -103669, 236991, -173779, 17308, 97635, -108462,
    45292, 21511, -45597, 29214, 29730, -20118,
    -23787, 75607, -81359, 5573, 118941, -190859,
    112690, 108264, -321815, 323170, -28811, -399010,
    616861, -356788, -302824, 899192, -885843, 97644,
    993840, -1522065, 881855, 673849, -2038186, 1999775,
    -261876, -2090849, 3207361, -1877829, -1301362, 4051884,
    -3988556, 603397, 3937783, -6089000, 3619835, 2283207,
    -7375547, 7319591, -1254166, -6886994, 10787736, -6536071,
    -3760521, 12698866, -12762405, 2443302, 11548937, -18422401,
    11425558, 6012113, -21419118, 21932128, -4656770, -19348132,
    31693538, -20284878, -9826225, 37496585, -39620131, 9364250,
    35173793, -60421146, 40881003, 18716198, -79808988, 91326245,
    -25375628, -94816187, 193698693, -168358806, -103005989, 1232316547,
    1232316547, -103005989, -168358806, 193698693, -94816187, -25375628,
    91326245, -79808988, 18716198, 40881003, -60421146, 35173793,
    9364250, -39620131, 37496585, -9826225, -20284878, 31693538,
    -19348132, -4656770, 21932128, -21419118, 6012113, 11425558,
    -18422401, 11548937, 2443302, -12762405, 12698866, -3760521,
    -6536071, 10787736, -6886994, -1254166, 7319591, -7375547,
    2283207, 3619835, -6089000, 3937783, 603397, -3988556,
    4051884, -1301362, -1877829, 3207361, -2090849, -261876,
    1999775, -2038186, 673849, 881855, -1522065, 993840,
    97644, -885843, 899192, -302824, -356788, 616861,
    -399010, -28811, 323170, -321815, 108264, 112690,
    -190859, 118941, 5573, -81359, 75607, -23787,
    -20118, 29730, 29214, -45597, 21511, 45292,
    -108462, 97635, 17308, -173779, 236991, -103669,
    -182313, 413222, -353559, -47460, 543565, -718962,
    314093, 490048, -1102299, 930526, 92888, -1308509,
    1716427, -761631, -1073173, 2433342, -2052455, -141920,
    2698690, -3544371, 1608019, 2064228, -4757721, 4035774,
    164513, -5023146, 6643453, -3092522, -3637321, 8574017,
    -7347327, -102885, 8736906, -11690650, 5599811, 6063608,
    -14704686, 12786461, -148219, -14669370, 19966458, -9881018,
    -9908212, 24911708, -22126898, 808687, 24877437, -34766901,
    17935600, 16846095, -44576712, 41070663, -2551927, -47102109,
    69412487, -38515052, -35280024, 103758660, -106366478, 10340789,
    158390615, -310715028, 291128618, 1500056324, 782938097, -308382525,
    19719651, 128216736, -137926687, 58787385, 33786861, -79492273,
    61617481, -6549926, -41589296, 52194828, -25213863, -14379189,
    37459360, -30930303, 3984050, 21626342, -28370156, 14355027,
    7652317, -21172459, 17980082, -2663721, -12367243, 16638852,
    -8668059, -4249002, 12372344, -10690155, 1772492, 7102621,
    -9729024, 5177953, 2312493, -7068896, 6179228, -1125043,
    -3923722, 5447776, -2946165, -1189258, 3814403, -3358067,
    661099, 2018901, -2829439, 1546563, 559271, -1881394,
    1659348, -348193, -933586, 1313214, -720307, -230581,
    811711, -711269, 156488, 367232, -512987, 278718,
    77427, -282519, 241520, -54218, -109269, 147297,
    -76492, -17535, 63298, -49227, 10214, 15567,
];

pub static SRC_INT32_4_1_1134_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_1_1134_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 16,
    block_in: 1,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_1_1134_5000_FIR),
};

static SRC_INT32_4_1_1134_5000_FIR: [i32; 64] = [
    181229, 1922691, -10819232, 944775, 65520446, -98625941,
    -135044853, 742605075, 1303396313, 467139053, -201578654, -31581083,
    58037529, -10776248, -5896319, 1847628, 609858, 882018,
    -14820460, 18962162, 55112445, -163310146, 3657689, 998465909,
    1195887709, 210518141, -204958384, 22397699, 39978351, -15578996,
    -1730507, 1250100, 1250100, -1730507, -15578996, 39978351,
    22397699, -204958384, 210518141, 1195887709, 998465909, 3657689,
    -163310146, 55112445, 18962162, -14820460, 882018, 609858,
    1847628, -5896319, -10776248, 58037529, -31581083, -201578654,
    467139053, 1303396313, 742605075, -135044853, -98625941, 65520446,
    944775, -10819232, 1922691, 181229,
];

pub static SRC_INT32_4_1_1512_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_1_1512_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 16,
    block_in: 1,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_1_1512_5000_FIR),
};

static SRC_INT32_4_1_1512_5000_FIR: [i32; 64] = [
    -139933, 3041808, -5942556, -16210169, 70551836, -56979161,
    -190181868, 729673480, 1382010435, 420668683, -230928298, 13422562,
    48607417, -21551211, -305442, 1820966, 77923, 3698060,
    -13078012, -1434073, 77257717, -137375937, -65642485, 1024126584,
    1255078946, 143850510, -204645548, 59586466, 21787445, -19389200,
    2853377, 728545, 728545, 2853377, -19389200, 21787445,
    59586466, -204645548, 143850510, 1255078946, 1024126584, -65642485,
    -137375937, 77257717, -1434073, -13078012, 3698060, 77923,
    1820966, -305442, -21551211, 48607417, 13422562, -230928298,
    420668683, 1382010435, 729673480, -190181868, -56979161, 70551836,
    -16210169, -5942556, 3041808, -139933,
];

pub static SRC_INT32_4_1_2268_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_1_2268_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 20,
    block_in: 1,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_1_2268_5000_FIR),
};

static SRC_INT32_4_1_2268_5000_FIR: [i32; 80] = [
    -138949, 1661272, -4192139, 139573, 21764362, -55017244,
    54328099, 48447179, -290804822, 691309176, 1538804121, 314365546,
    -269428287, 114087268, 529342, -36184465, 24037997, -5890740,
    -1237572, 1065461, 6788, 1752640, -6972224, 9168856,
    9417431, -58537597, 104517296, -57490023, -205522288, 1067008995,
    1369856969, 946844, -176897577, 130364657, -40027903, -11737412,
    18484507, -8037971, 858302, 424745, 424745, 858302,
    -8037971, 18484507, -11737412, -40027903, 130364657, -176897577,
    946844, 1369856969, 1067008995, -205522288, -57490023, 104517296,
    -58537597, 9417431, 9168856, -6972224, 1752640, 6788,
    1065461, -1237572, -5890740, 24037997, -36184465, 529342,
    114087268, -269428287, 314365546, 1538804121, 691309176, -290804822,
    48447179, 54328099, -55017244, 21764362, 139573, -4192139,
    1661272, -138949,
];

pub static SRC_INT32_4_1_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_1_4535_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 112,
    block_in: 1,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_1_4535_5000_FIR),
};

static SRC_INT32_4_1_4535_5000_FIR: [i32; 448] = [
    -26732, 48518, -78547, 117459, -165252, 221073,
    -283009, 347904, -411216, 466929, -507541, 524148,
    -506625, 443929, -324518, 136892, 129760, -484814,
    935388, -1485480, 2135090, -2879372, 3707860, -4603810,
    5543704, -6496957, 7425870, -8285843, 9025888, -9589432,
    9915417, -9939668, 9596506, -8820539, 7548593, -5721672,
    3286883, -199209, -3576986, 8066848, -13284471, 19233065,
    -25906070, 33289565, -41366430, 50123095, -59560314, 69710676,
    -80668395, 92643328, -106067601, 121829845, -141867178, 170985612,
    -224495130, 388177785, 2000075761, -137345000, 26295384, 13790574,
    -33846396, 45074312, -51394449, 54567085, -55530749, 54858755,
    -52943453, 50079387, -46503701, 42416632, -37992042, 33382739,
    -28723033, 24129819, -19702969, 15525480, -11663628, 8167302,
    -5070599, 2392703, -139054, -1697226, 3133686, -4196761,
    4919881, -5341573, 5503592, -5449165, 5221386, -4861802,
    4409236, -3898856, 3361487, -2823195, 2305096, -1823384,
    1389556, -1010781, 690397, -428483, 222482, -67832,
    -41423, 112065, -151198, 165818, -162481, 147043,
    -124502, 98912, -73367, 50048, -4814, 16764,
    -37667, 69984, -116067, 177933, -256993, 353752,
    -467505, 596028, -735300, 879264, -1019668, 1145990,
    -1245483, 1303352, -1303079, 1226905, -1056471, 773615,
    -361302, -195326, 907811, -1783198, 2822851, -4021313,
    5365267, -6832647, 8391950, -10001792, 11610739, -13157450,
    14571117, -15772219, 16673540, -17181407, 17197070, -16618099,
    15339657, -13255444, 10258023, -6238162, 1082619, 5330471,
    -13139964, 22516153, -33685437, 46973168, -62880867, 82233546,
    -106483650, 138407766, -183953535, 258302653, -414309882, 1043926099,
    1643093623, -411193168, 211212737, -126452135, 78415050, -47068946,
    24976549, -8743383, -3407680, 12509239, -19216727, 23981057,
    -27136444, 28947619, -29636113, 29395080, -28397573, 26800974,
    -24749121, 22373097, -19791281, 17109042, -14418358, 11797506,
    -9310953, 7009501, -4930714, 3099624, -1529703, 224054,
    823222, -1625537, 2202267, -2577198, 2777024, -2829935,
    2764356, -2607846, 2386190, -2122700, 1837715, -1548301,
    1268139, -1007570, 773780, -571096, 401361, -264352,
    158229, -79975, 25812, 8423, -26959, 33828,
    -32674, 26619, 26619, -32674, 33828, -26959,
    8423, 25812, -79975, 158229, -264352, 401361,
    -571096, 773780, -1007570, 1268139, -1548301, 1837715,
    -2122700, 2386190, -2607846, 2764356, -2829935, 2777024,
    -2577198, 2202267, -1625537, 823222, 224054, -1529703,
    3099624, -4930714, 7009501, -9310953, 11797506, -14418358,
    17109042, -19791281, 22373097, -24749121, 26800974, -28397573,
    29395080, -29636113, 28947619, -27136444, 23981057, -19216727,
    12509239, -3407680, -8743383, 24976549, -47068946, 78415050,
    -126452135, 211212737, -411193168, 1643093623, 1043926099, -414309882,
    258302653, -183953535, 138407766, -106483650, 82233546, -62880867,
    46973168, -33685437, 22516153, -13139964, 5330471, 1082619,
    -6238162, 10258023, -13255444, 15339657, -16618099, 17197070,
    -17181407, 16673540, -15772219, 14571117, -13157450, 11610739,
    -10001792, 8391950, -6832647, 5365267, -4021313, 2822851,
    -1783198, 907811, -195326, -361302, 773615, -1056471,
    1226905, -1303079, 1303352, -1245483, 1145990, -1019668,
    879264, -735300, 596028, -467505, 353752, -256993,
    177933, -116067, 69984, -37667, 16764, -4814,
    50048, -73367, 98912, -124502, 147043, -162481,
    165818, -151198, 112065, -41423, -67832, 222482,
    -428483, 690397, -1010781, 1389556, -1823384, 2305096,
    -2823195, 3361487, -3898856, 4409236, -4861802, 5221386,
    -5449165, 5503592, -5341573, 4919881, -4196761, 3133686,
    -1697226, -139054, 2392703, -5070599, 8167302, -11663628,
    15525480, -19702969, 24129819, -28723033, 33382739, -37992042,
    42416632, -46503701, 50079387, -52943453, 54858755, -55530749,
    54567085, -51394449, 45074312, -33846396, 13790574, 26295384,
    -137345000, 2000075761, 388177785, -224495130, 170985612, -141867178,
    121829845, -106067601, 92643328, -80668395, 69710676, -59560314,
    50123095, -41366430, 33289565, -25906070, 19233065, -13284471,
    8066848, -3576986, -199209, 3286883, -5721672, 7548593,
    -8820539, 9596506, -9939668, 9915417, -9589432, 9025888,
    -8285843, 7425870, -6496957, 5543704, -4603810, 3707860,
    -2879372, 2135090, -1485480, 935388, -484814, 129760,
    136892, -324518, 443929, -506625, 524148, -507541,
    466929, -411216, 347904, -283009, 221073, -165252,
    117459, -78547, 48518, -26732,
];

pub static SRC_INT32_4_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_3_4535_5000",
    input_stride: 2,
    output_stride: 3,
    subfilter_count: 4,
    subfilter_length: 112,
    block_in: 3,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_3_4535_5000_FIR),
};

static SRC_INT32_4_3_4535_5000_FIR: [i32; 448] = [
    -26732, 48518, -78547, 117459, -165252, 221073,
    -283009, 347904, -411216, 466929, -507541, 524148,
    -506625, 443929, -324518, 136892, 129760, -484814,
    935388, -1485480, 2135090, -2879372, 3707860, -4603810,
    5543704, -6496957, 7425870, -8285843, 9025888, -9589432,
    9915417, -9939668, 9596506, -8820539, 7548593, -5721672,
    3286883, -199209, -3576986, 8066848, -13284471, 19233065,
    -25906070, 33289565, -41366430, 50123095, -59560314, 69710676,
    -80668395, 92643328, -106067601, 121829845, -141867178, 170985612,
    -224495130, 388177785, 2000075761, -137345000, 26295384, 13790574,
    -33846396, 45074312, -51394449, 54567085, -55530749, 54858755,
    -52943453, 50079387, -46503701, 42416632, -37992042, 33382739,
    -28723033, 24129819, -19702969, 15525480, -11663628, 8167302,
    -5070599, 2392703, -139054, -1697226, 3133686, -4196761,
    4919881, -5341573, 5503592, -5449165, 5221386, -4861802,
    4409236, -3898856, 3361487, -2823195, 2305096, -1823384,
    1389556, -1010781, 690397, -428483, 222482, -67832,
    -41423, 112065, -151198, 165818, -162481, 147043,
    -124502, 98912, -73367, 50048, -4814, 16764,
    -37667, 69984, -116067, 177933, -256993, 353752,
    -467505, 596028, -735300, 879264, -1019668, 1145990,
    -1245483, 1303352, -1303079, 1226905, -1056471, 773615,
    -361302, -195326, 907811, -1783198, 2822851, -4021313,
    5365267, -6832647, 8391950, -10001792, 11610739, -13157450,
    14571117, -15772219, 16673540, -17181407, 17197070, -16618099,
    15339657, -13255444, 10258023, -6238162, 1082619, 5330471,
    -13139964, 22516153, -33685437, 46973168, -62880867, 82233546,
    -106483650, 138407766, -183953535, 258302653, -414309882, 1043926099,
    1643093623, -411193168, 211212737, -126452135, 78415050, -47068946,
    24976549, -8743383, -3407680, 12509239, -19216727, 23981057,
    -27136444, 28947619, -29636113, 29395080, -28397573, 26800974,
    -24749121, 22373097, -19791281, 17109042, -14418358, 11797506,
    -9310953, 7009501, -4930714, 3099624, -1529703, 224054,
    823222, -1625537, 2202267, -2577198, 2777024, -2829935,
    2764356, -2607846, 2386190, -2122700, 1837715, -1548301,
    1268139, -1007570, 773780, -571096, 401361, -264352,
    158229, -79975, 25812, 8423, -26959, 33828,
    -32674, 26619, 26619, -32674, 33828, -26959,
    8423, 25812, -79975, 158229, -264352, 401361,
    -571096, 773780, -1007570, 1268139, -1548301, 1837715,
    -2122700, 2386190, -2607846, 2764356, -2829935, 2777024,
    -2577198, 2202267, -1625537, 823222, 224054, -1529703,
    3099624, -4930714, 7009501, -9310953, 11797506, -14418358,
    17109042, -19791281, 22373097, -24749121, 26800974, -28397573,
    29395080, -29636113, 28947619, -27136444, 23981057, -19216727,
    12509239, -3407680, -8743383, 24976549, -47068946, 78415050,
    -126452135, 211212737, -411193168, 1643093623, 1043926099, -414309882,
    258302653, -183953535, 138407766, -106483650, 82233546, -62880867,
    46973168, -33685437, 22516153, -13139964, 5330471, 1082619,
    -6238162, 10258023, -13255444, 15339657, -16618099, 17197070,
    -17181407, 16673540, -15772219, 14571117, -13157450, 11610739,
    -10001792, 8391950, -6832647, 5365267, -4021313, 2822851,
    -1783198, 907811, -195326, -361302, 773615, -1056471,
    1226905, -1303079, 1303352, -1245483, 1145990, -1019668,
    879264, -735300, 596028, -467505, 353752, -256993,
    177933, -116067, 69984, -37667, 16764, -4814,
    50048, -73367, 98912, -124502, 147043, -162481,
    165818, -151198, 112065, -41423, -67832, 222482,
    -428483, 690397, -1010781, 1389556, -1823384, 2305096,
    -2823195, 3361487, -3898856, 4409236, -4861802, 5221386,
    -5449165, 5503592, -5341573, 4919881, -4196761, 3133686,
    -1697226, -139054, 2392703, -5070599, 8167302, -11663628,
    15525480, -19702969, 24129819, -28723033, 33382739, -37992042,
    42416632, -46503701, 50079387, -52943453, 54858755, -55530749,
    54567085, -51394449, 45074312, -33846396, 13790574, 26295384,
    -137345000, 2000075761, 388177785, -224495130, 170985612, -141867178,
    121829845, -106067601, 92643328, -80668395, 69710676, -59560314,
    50123095, -41366430, 33289565, -25906070, 19233065, -13284471,
    8066848, -3576986, -199209, 3286883, -5721672, 7548593,
    -8820539, 9596506, -9939668, 9915417, -9589432, 9025888,
    -8285843, 7425870, -6496957, 5543704, -4603810, 3707860,
    -2879372, 2135090, -1485480, 935388, -484814, 129760,
    136892, -324518, 443929, -506625, 524148, -507541,
    466929, -411216, 347904, -283009, 221073, -165252,
    117459, -78547, 48518, -26732,
];

pub static SRC_INT32_4_21_1080_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_21_1080_5000",
    input_stride: 5,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 68,
    block_in: 21,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_21_1080_5000_FIR),
};

static SRC_INT32_4_21_1080_5000_FIR: [i32; 272] = [
    -14416, -72337, -186505, -356178, -553765, -717436,
    -752018, -541917, 22596, 1007888, 2394635, 4040746,
    5661788, 6840634, 7074405, 5859971, 2810441, -2214248,
    -8987081, -16832238, -24608283, -30774838, -33548079, -31133714,
    -22009132, -5212549, 19410413, 51050993, 87909974, 127317541,
    165995010, 200428218, 227301224, 243925927, 248601008, 240843147,
    221453219, 192406725, 156586225, 117398816, 78339129, 42565012,
    12547957, -10155053, -24984106, -32314339, -33273388, -29479439,
    -22749329, -14825194, -7158842, -778089, 3757960, 6323713,
    7133085, 6614089, 5279723, 3617994, 2015715, 721320,
    -156526, -623804, -761648, -684407, -504519, -309514,
    -152351, -52989, -24281, -95276, -224261, -404758,
    -601063, -742505, -727075, -437671, 228439, 1320158,
    2790479, 4462604, 6016660, 7008135, 6924655, 5280325,
    1737656, -3761900, -10884667, -18836969, -26367884, -31858239,
    -33497223, -29530935, -18550656, 223890, 26716404, 59867468,
    97643152, 137191824, 175137558, 207974086, 232503808, 246255799,
    247817563, 237027523, 214997174, 183959260, 146966590, 107489768,
    68977064, 34443410, 6147592, -14600790, -27486678, -33094350,
    -32700678, -28000933, -20817220, -12836390, -5413295, 540622,
    4580659, 6676634, 7108340, 6336728, 4877717, 3199656,
    1656737, 461355, -309620, -684945, -757853, -645093,
    -454503, -265382, -121930, -37049, -37049, -121930,
    -265382, -454503, -645093, -757853, -684945, -309620,
    461355, 1656737, 3199656, 4877717, 6336728, 7108340,
    6676634, 4580659, 540622, -5413295, -12836390, -20817220,
    -28000933, -32700678, -33094350, -27486678, -14600790, 6147592,
    34443410, 68977064, 107489768, 146966590, 183959260, 214997174,
    237027523, 247817563, 246255799, 232503808, 207974086, 175137558,
    137191824, 97643152, 59867468, 26716404, 223890, -18550656,
    -29530935, -33497223, -31858239, -26367884, -18836969, -10884667,
    -3761900, 1737656, 5280325, 6924655, 7008135, 6016660,
    4462604, 2790479, 1320158, 228439, -437671, -727075,
    -742505, -601063, -404758, -224261, -95276, -24281,
    -52989, -152351, -309514, -504519, -684407, -761648,
    -623804, -156526, 721320, 2015715, 3617994, 5279723,
    6614089, 7133085, 6323713, 3757960, -778089, -7158842,
    -14825194, -22749329, -29479439, -33273388, -32314339, -24984106,
    -10155053, 12547957, 42565012, 78339129, 117398816, 156586225,
    192406725, 221453219, 240843147, 248601008, 243925927, 227301224,
    200428218, 165995010, 127317541, 87909974, 51050993, 19410413,
    -5212549, -22009132, -31133714, -33548079, -30774838, -24608283,
    -16832238, -8987081, -2214248, 2810441, 5859971, 7074405,
    6840634, 5661788, 4040746, 2394635, 1007888, 22596,
    -541917, -752018, -717436, -553765, -356178, -186505,
    -72337, -14416,
];

pub static SRC_INT32_4_21_3239_5000: StageDescriptor = StageDescriptor {
    name: "int32_4_21_3239_5000",
    input_stride: 5,
    output_stride: 1,
    subfilter_count: 4,
    subfilter_length: 152,
    block_in: 21,
    block_out: 4,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_4_21_3239_5000_FIR),
};

static SRC_INT32_4_21_3239_5000_FIR: [i32; 608] = [
    -7267, -25980, -48530, -66032, -67054, -41462,
    14763, 95290, 181660, 245487, 255113, 185760,
    30601, -190833, -430632, -619410, -682352, -561612,
    -239469, 245028, 792892, 1259851, 1488597, 1352808,
    802224, -104688, -1193047, -2196538, -2814548, -2791297,
    -1998258, -496581, 1442407, 3372467, 4763859, 5135212,
    4195904, 1960809, -1199456, -4597794, -7363546, -8647942,
    -7857541, -4856424, -77243, 5503133, 10537710, 13609309,
    13595304, 10009954, 3230581, -5468825, -14113266, -20433759,
    -22410735, -18833682, -9736685, 3417635, 17886933, 30139805,
    36614783, 34600242, 23041399, 3075715, -21860415, -46428487,
    -64255958, -69134416, -56321069, -23675673, 27619540, 92937368,
    164745712, 233740237, 290373650, 326496777, 336795138, 319739007,
    277858511, 217288997, 146677151, 75664399, 13244260, -33691886,
    -61353188, -69424970, -60785715, -40662277, -15426533, 8704709,
    26803880, 35992105, 35708764, 27486821, 14332387, -119735,
    -12472709, -20270859, -22408518, -19191678, -12081197, -3213179,
    5169497, 11236322, 13928231, 13095344, 9409888, 4102731,
    -1393487, -5800317, -8266373, -8504667, -6780405, -3772111,
    -355761, 2626847, 4558773, 5158407, 4495033, 2919476,
    938755, -927066, -2268958, -2867133, -2711744, -1970171,
    -917384, 147758, 977598, 1425355, 1461625, 1159466,
    657349, 113144, -337809, -610866, -682096, -581195,
    -372510, -131427, 76865, 211279, 259368, 233406,
    160950, 73687, -2025, -50725, -68964, -62742,
    -42953, -20687, -11262, -31536, -53806, -68286,
    -63451, -30233, 33131, 117310, 200980, 254147,
    245833, 154746, -19950, -251498, -485597, -649679,
    -670929, -499484, -130677, 381107, 923450, 1345198,
    1492405, 1253788, 603990, -368943, -1463589, -2398595,
    -2876638, -2666394, -1682205, -37871, 1945936, 3791562,
    4967984, 5028567, 3750251, 1235340, -2058976, -5383852,
    -7852835, -8659248, -7307674, -3798644, 1290967, 6869810,
    11541394, 13927237, 13034825, 8579428, 1168098, -7722564,
    -15998883, -21400338, -22059582, -17044313, -6740601, 7041224,
    21303183, 32427474, 36981938, 32600872, 18741931, -2873534,
    -28276564, -51772678, -66909626, -67725142, -50032829, -12476587,
    42885810, 110624910, 182639672, 249411945, 301592732, 331621571,
    335065176, 311411688, 264162767, 200205172, 128586822, 58939037,
    -147717, -42486010, -65144999, -68659381, -56592056, -34577417,
    -9068227, 13946369, 29997780, 36781511, 34299243, 24522474,
    10698007, -3521116, -14917234, -21347151, -22065860, -17702891,
    -9938795, -989988, 6959758, 12247169, 14036728, 12400304,
    8179727, 2691321, -2639468, -6620056, -8533189, -8236664,
    -6116038, -2921120, 459672, 3225517, 4836604, 5101252,
    4168422, 2441112, 442858, -1323844, -2492115, -2894983,
    -2571769, -1724244, -641215, 384983, 1128498, 1471670,
    1413177, 1046491, 519295, -12653, -424723, -647236,
    -670909, -536190, -312417, -74195, 118367, 231278,
    258918, 218400, 139343, 52862, -17063, -58037,
    -69322, -58604, -37238, -15755, -15755, -37238,
    -58604, -69322, -58037, -17063, 52862, 139343,
    218400, 258918, 231278, 118367, -74195, -312417,
    -536190, -670909, -647236, -424723, -12653, 519295,
    1046491, 1413177, 1471670, 1128498, 384983, -641215,
    -1724244, -2571769, -2894983, -2492115, -1323844, 442858,
    2441112, 4168422, 5101252, 4836604, 3225517, 459672,
    -2921120, -6116038, -8236664, -8533189, -6620056, -2639468,
    2691321, 8179727, 12400304, 14036728, 12247169, 6959758,
    -989988, -9938795, -17702891, -22065860, -21347151, -14917234,
    -3521116, 10698007, 24522474, 34299243, 36781511, 29997780,
    13946369, -9068227, -34577417, -56592056, -68659381, -65144999,
    -42486010, -147717, 58939037, 128586822, 200205172, 264162767,
    311411688, 335065176, 331621571, 301592732, 249411945, 182639672,
    110624910, 42885810, -12476587, -50032829, -67725142, -66909626,
    -51772678, -28276564, -2873534, 18741931, 32600872, 36981938,
    32427474, 21303183, 7041224, -6740601, -17044313, -22059582,
    -21400338, -15998883, -7722564, 1168098, 8579428, 13034825,
    13927237, 11541394, 6869810, 1290967, -3798644, -7307674,
    -8659248, -7852835, -5383852, -2058976, 1235340, 3750251,
    5028567, 4967984, 3791562, 1945936, -37871, -1682205,
    -2666394, -2876638, -2398595, -1463589, -368943, 603990,
    1253788, 1492405, 1345198, 923450, 381107, -130677,
    -499484, -670929, -649679, -485597, -251498, -19950,
    154746, 245833, 254147, 200980, 117310, 33131,
    -30233, -63451, -68286, -53806, -31536, -11262,
    -20687, -42953, -62742, -68964, -50725, -2025,
    73687, 160950, 233406, 259368, 211279, 76865,
    -131427, -372510, -581195, -682096, -610866, -337809,
    113144, 657349, 1159466, 1461625, 1425355, 977598,
    147758, -917384, -1970171, -2711744, -2867133, -2268958,
    -927066, 938755, 2919476, 4495033, 5158407, 4558773,
    2626847, -355761, -3772111, -6780405, -8504667, -8266373,
    -5800317, -1393487, 4102731, 9409888, 13095344, 13928231,
    11236322, 5169497, -3213179, -12081197, -19191678, -22408518,
    -20270859, -12472709, -119735, 14332387, 27486821, 35708764,
    35992105, 26803880, 8704709, -15426533, -40662277, -60785715,
    -69424970, -61353188, -33691886, 13244260, 75664399, 146677151,
    217288997, 277858511, 319739007, 336795138, 326496777, 290373650,
    233740237, 164745712, 92937368, 27619540, -23675673, -56321069,
    -69134416, -64255958, -46428487, -21860415, 3075715, 23041399,
    34600242, 36614783, 30139805, 17886933, 3417635, -9736685,
    -18833682, -22410735, -20433759, -14113266, -5468825, 3230581,
    10009954, 13595304, 13609309, 10537710, 5503133, -77243,
    -4856424, -7857541, -8647942, -7363546, -4597794, -1199456,
    1960809, 4195904, 5135212, 4763859, 3372467, 1442407,
    -496581, -1998258, -2791297, -2814548, -2196538, -1193047,
    -104688, 802224, 1352808, 1488597, 1259851, 792892,
    245028, -239469, -561612, -682352, -619410, -430632,
    -190833, 30601, 185760, 255113, 245487, 181660,
    95290, 14763, -41462, -67054, -66032, -48530,
    -25980, -7267,
];

pub static SRC_INT32_5_7_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_5_7_4535_5000",
    input_stride: 4,
    output_stride: 3,
    subfilter_count: 5,
    subfilter_length: 152,
    block_in: 7,
    block_out: 5,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_5_7_4535_5000_FIR),
};

static SRC_INT32_5_7_4535_5000_FIR: [i32; 760] = [
    -20576, -1403, 43407, -59611, 8410, 86241,
    -128979, 38739, 141527, -239551, 104872, 203238,
    -401881, 226794, 259255, -624424, 428828, 289845,
    -911319, 738642, 266424, -1259841, 1185572, 150783,
    -1657690, 1798279, -105075, -2080303, 2601830, -558425,
    -2488380, 3614371, -1274652, -2825770, 4843615, -2325591,
    -3017734, 6283414, -3787711, -2969460, 7910643, -5740734,
    -2564332, 9682592, -8267569, -1661011, 11534876, -11457060,
    -87400, 13379577, -15412015, 2372153, 15102751, -20267221,
    6003928, 16559219, -26227257, 11222739, 17559710, -33647349,
    18701698, 17837678, -43220113, 29690220, 16958029, -56469119,
    46917815, 14029262, -77360558, 77862525, 6518984, -119818933,
    153108146, -18316511, -286390152, 711821654, 1451446254, 440206354,
    -316834635, 75093987, 100117038, -131375794, 51068231, 46040209,
    -80825602, 41474089, 23563102, -55919113, 35331366, 11337723,
    -40464200, 30460937, 3916703, -29685270, 26196526, -752086,
    -21688422, 22308612, -3642815, -15575402, 18727640, -5303789,
    -10858077, 15447763, -6088256, -7236091, 12486005, -6248296,
    -4501018, 9862610, -5976316, -2491931, 7591166, -5424290,
    -1074359, 5674020, -4712994, -130698, 4100947, -3936793,
    443581, 2849935, -3166608, 740882, 1889318, -2452388,
    841227, 1180687, -1825663, 811760, 682071, -1302372,
    706513, 351019, -885950, 566711, 147276, -570517,
    421666, 34853, -343976, 290199, -16614, -190826,
    182438, -31210, -94544, 101819, -26748, -39410,
    47092, -15290, -26723, 14821, 30705, -70524,
    45587, 52660, -141882, 107133, 70656, -246712,
    215180, 72297, -388240, 388176, 38806, -565016,
    646100, -55712, -768723, 1008653, -244503, -981932,
    1492845, -567743, -1176005, 2110097, -1071408, -1309319,
    2863010, -1805434, -1325977, 3741986, -2821290, -1155039,
    4721931, -4169184, -710193, 5759174, -5895276, 110437,
    6788675, -8039396, 1425032, 7721313, -10633973, 3370547,
    8440670, -13705165, 6109112, 8797940, -17277714, 9842471,
    8602055, -21386291, 14842690, 7598765, -26098977, 21517495,
    5424080, -31566333, 30555878, 1494194, -38132866, 43285111,
    -5282956, -46630359, 62693901, -17404786, -59345603, 97204526,
    -42519877, -84671870, 182786610, -122170345, -190944746, 973614914,
    1364122563, 185057931, -289771279, 144330072, 34943284, -119244296,
    83748234, 8002476, -69902001, 60308392, -2928596, -45504778,
    46742557, -8352040, -30628898, 37252857, -11080873, -20575792,
    29909747, -12228299, -13429353, 23920082, -12358357, -8249566,
    18915382, -11813727, -4504012, 14707328, -10831284, -1851002,
    11187748, -9588160, -46302, 8282982, -8221460, 1099817,
    5932002, -6837198, 1742865, 4076201, -5514823, 2013579,
    2655416, -4310161, 2022119, 1607411, -3258050, 1859882,
    869223, -2375188, 1600457, 379365, -1663316, 1300534,
    80195, -1112655, 1001154, -79990, -705384, 729419,
    -145417, -418965, 500616, -151985, -229071, 320617,
    -127123, -111992, 188357, -90275, -46396, 98218,
    -53880, -14440, 42134, -24664, -28447, 30415,
    10389, -68968, 77769, 5853, -128898, 160811,
    -19041, -207904, 292724, -80920, -301040, 486885,
    -201873, -396935, 755040, -409258, -476031, 1105000,
    -734863, -509077, 1537942, -1213362, -456040, 2045488,
    -1880078, -265591, 2606750, -2768147, 124768, 3185534,
    -3905269, 787975, 3727835, -5310284, 1806278, 4159658,
    -6989904, 3270134, 4384988, -8935924, 5277862, 4283358,
    -11123251, 7937290, 3705883, -13509047, 11371475, 2467448,
    -16033178, 15732316, 330486, -18620092, 21229623, -3029447,
    -21182087, 28192530, -8098985, -23623797, 37205601, -15702818,
    -25847626, 49442762, -27463225, -27759713, 67632747, -47242174,
    -29275959, 99691080, -87312862, -30327638, 181008956, -218974747,
    -30866085, 1198941959, 1198941959, -30866085, -218974747, 181008956,
    -30327638, -87312862, 99691080, -29275959, -47242174, 67632747,
    -27759713, -27463225, 49442762, -25847626, -15702818, 37205601,
    -23623797, -8098985, 28192530, -21182087, -3029447, 21229623,
    -18620092, 330486, 15732316, -16033178, 2467448, 11371475,
    -13509047, 3705883, 7937290, -11123251, 4283358, 5277862,
    -8935924, 4384988, 3270134, -6989904, 4159658, 1806278,
    -5310284, 3727835, 787975, -3905269, 3185534, 124768,
    -2768147, 2606750, -265591, -1880078, 2045488, -456040,
    -1213362, 1537942, -509077, -734863, 1105000, -476031,
    -409258, 755040, -396935, -201873, 486885, -301040,
    -80920, 292724, -207904, -19041, 160811, -128898,
    5853, 77769, -68968, 10389, 30415, -28447,
    -24664, 42134, -14440, -53880, 98218, -46396,
    -90275, 188357, -111992, -127123, 320617, -229071,
    -151985, 500616, -418965, -145417, 729419, -705384,
    -79990, 1001154, -1112655, 80195, 1300534, -1663316,
    379365, 1600457, -2375188, 869223, 1859882, -3258050,
    1607411, 2022119, -4310161, 2655416, 2013579, -5514823,
    4076201, 1742865, -6837198, 5932002, 1099817, -8221460,
    8282982, -46302, -9588160, 11187748, -1851002, -10831284,
    14707328, -4504012, -11813727, 18915382, -8249566, -12358357,
    23920082, -13429353, -12228299, 29909747, -20575792, -11080873,
    37252857, -30628898, -8352040, 46742557, -45504778, -2928596,
    60308392, -69902001, 8002476, 83748234, -119244296, 34943284,
    144330072, -289771279, 185057931, 1364122563, 973614914, -190944746,
    -122170345, 182786610, -84671870, -42519877, 97204526, -59345603,
    -17404786, 62693901, -46630359, -5282956, 43285111, -38132866,
    1494194, 30555878, -31566333, 5424080, 21517495, -26098977,
    7598765, 14842690, -21386291, 8602055, 9842471, -17277714,
    8797940, 6109112, -13705165, 8440670, 3370547, -10633973,
    7721313, 1425032, -8039396, 6788675, 110437, -5895276,
    5759174, -710193, -4169184, 4721931, -1155039, -2821290,
    3741986, -1325977, -1805434, 2863010, -1309319, -1071408,
    2110097, -1176005, -567743, 1492845, -981932, -244503,
    1008653, -768723, -55712, 646100, -565016, 38806,
    388176, -388240, 72297, 215180, -246712, 70656,
    107133, -141882, 52660, 45587, -70524, 30705,
    14821, -26723, -15290, 47092, -39410, -26748,
    101819, -94544, -31210, 182438, -190826, -16614,
    290199, -343976, 34853, 421666, -570517, 147276,
    566711, -885950, 351019, 706513, -1302372, 682071,
    811760, -1825663, 1180687, 841227, -2452388, 1889318,
    740882, -3166608, 2849935, 443581, -3936793, 4100947,
    -130698, -4712994, 5674020, -1074359, -5424290, 7591166,
    -2491931, -5976316, 9862610, -4501018, -6248296, 12486005,
    -7236091, -6088256, 15447763, -10858077, -5303789, 18727640,
    -15575402, -3642815, 22308612, -21688422, -752086, 26196526,
    -29685270, 3916703, 30460937, -40464200, 11337723, 35331366,
    -55919113, 23563102, 41474089, -80825602, 46040209, 51068231,
    -131375794, 100117038, 75093987, -316834635, 440206354, 1451446254,
    711821654, -286390152, -18316511, 153108146, -119818933, 6518984,
    77862525, -77360558, 14029262, 46917815, -56469119, 16958029,
    29690220, -43220113, 17837678, 18701698, -33647349, 17559710,
    11222739, -26227257, 16559219, 6003928, -20267221, 15102751,
    2372153, -15412015, 13379577, -87400, -11457060, 11534876,
    -1661011, -8267569, 9682592, -2564332, -5740734, 7910643,
    -2969460, -3787711, 6283414, -3017734, -2325591, 4843615,
    -2825770, -1274652, 3614371, -2488380, -558425, 2601830,
    -2080303, -105075, 1798279, -1657690, 150783, 1185572,
    -1259841, 266424, 738642, -911319, 289845, 428828,
    -624424, 259255, 226794, -401881, 203238, 104872,
    -239551, 141527, 38739, -128979, 86241, 8410,
    -59611, 43407, -1403, -20576,
];

pub static SRC_INT32_5_21_1728_5000: StageDescriptor = StageDescriptor {
    name: "int32_5_21_1728_5000",
    input_stride: 4,
    output_stride: 1,
    subfilter_count: 5,
    subfilter_length: 68,
    block_in: 21,
    block_out: 5,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_5_21_1728_5000_FIR),
};

static SRC_INT32_5_21_1728_5000_FIR: [i32; 340] = [
    -57489, -93867, -75674, 56818, 339170, 740119,
    1129956, 1284099, 939505, -96755, -1813521, -3887072,
    -5659445, -6251715, -4821336, -915861, 5181358, 12251195,
    18212343, 20534940, 16957679, 6354812, -10492609, -30495974,
    -48446812, -57871258, -52439089, -27627714, 17782056, 80813987,
    154327753, 228071151, 290580104, 331511108, 343850325, 325450912,
    279508813, 213855305, 139247100, 67086170, 7131872, -34256024,
    -54970461, -56987697, -45323467, -26467275, -6738119, 9032146,
    18222460, 20480815, 17228842, 10849218, 3831239, -1894231,
    -5299583, -6271339, -5369758, -3471055, -1426239, 169282,
    1059667, 1284945, 1062576, 655138, 270922, 18776,
    -86632, -89060, -66407, -96531, -60071, 101072,
    412492, 824983, 1188056, 1263092, 791013, -391051,
    -2216204, -4291814, -5901857, -6149936, -4241670, 153294,
    6573292, 13610397, 19049513, 20349399, 15405611, 3420053,
    -14380415, -34446869, -51228758, -58154700, -49121714, -20161637,
    29150902, 94971412, 169421663, 241833982, 300777328, 336411591,
    342603161, 318273734, 267639453, 199279204, 124269830, 53857896,
    -2761597, -40043945, -56743992, -55552131, -41913138, -22408681,
    -3149353, 11438778, 19204151, 20203187, 16119982, 9423638,
    2535859, -2776761, -5678280, -6215028, -5040317, -3050077,
    -1058071, 406135, 1152653, 1267756, 987991, 571426,
    208272, -13207, -93425, -82588, -74898, -96554,
    -39380, 151583, 490198, 908176, 1234722, 1219901,
    613371, -712155, -2630003, -4678573, -6089502, -5960407,
    -3559926, 1306606, 7992645, 14906849, 19719766, 19909868,
    13565210, 244996, -18365559, -38269876, -53615050, -57792844,
    -44995622, -11867374, 41193420, 109483299, 184436645, 255052858,
    310029991, 340117700, 340117700, 310029991, 255052858, 184436645,
    109483299, 41193420, -11867374, -44995622, -57792844, -53615050,
    -38269876, -18365559, 244996, 13565210, 19909868, 19719766,
    14906849, 7992645, 1306606, -3559926, -5960407, -6089502,
    -4678573, -2630003, -712155, 613371, 1219901, 1234722,
    908176, 490198, 151583, -39380, -96554, -74898,
    -82588, -93425, -13207, 208272, 571426, 987991,
    1267756, 1152653, 406135, -1058071, -3050077, -5040317,
    -6215028, -5678280, -2776761, 2535859, 9423638, 16119982,
    20203187, 19204151, 11438778, -3149353, -22408681, -41913138,
    -55552131, -56743992, -40043945, -2761597, 53857896, 124269830,
    199279204, 267639453, 318273734, 342603161, 336411591, 300777328,
    241833982, 169421663, 94971412, 29150902, -20161637, -49121714,
    -58154700, -51228758, -34446869, -14380415, 3420053, 15405611,
    20349399, 19049513, 13610397, 6573292, 153294, -4241670,
    -6149936, -5901857, -4291814, -2216204, -391051, 791013,
    1263092, 1188056, 824983, 412492, 101072, -60071,
    -96531, -66407, -89060, -86632, 18776, 270922,
    655138, 1062576, 1284945, 1059667, 169282, -1426239,
    -3471055, -5369758, -6271339, -5299583, -1894231, 3831239,
    10849218, 17228842, 20480815, 18222460, 9032146, -6738119,
    -26467275, -45323467, -56987697, -54970461, -34256024, 7131872,
    67086170, 139247100, 213855305, 279508813, 325450912, 343850325,
    331511108, 290580104, 228071151, 154327753, 80813987, 17782056,
    -27627714, -52439089, -57871258, -48446812, -30495974, -10492609,
    6354812, 16957679, 20534940, 18212343, 12251195, 5181358,
    -915861, -4821336, -6251715, -5659445, -3887072, -1813521,
    -96755, 939505, 1284099, 1129956, 740119, 339170,
    56818, -75674, -93867, -57489,
];

pub static SRC_INT32_5_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_5_21_4535_5000",
    input_stride: 4,
    output_stride: 1,
    subfilter_count: 5,
    subfilter_length: 456,
    block_in: 21,
    block_out: 5,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_5_21_4535_5000_FIR),
};

static SRC_INT32_5_21_4535_5000_FIR: [i32; 2280] = [
    -5945, -9287, -8221, -2140, 6750, 14045,
    15218, 8220, -4813, -17902, -23831, -17960,
    -1288, 19074, 32739, 31189, 12732, -15465,
    -39854, -46840, -30092, 4981, 42428, 62786,
    52959, 14050, -37331, -75829, -79622, -42374,
    21499, 81879, 106872, 79315, 7475, -76357,
    -130015, -122350, -50662, 54819, 143133, 166872,
    107133, -13761, -139655, -206222, -173408, -48472,
    113196, 232061, 243140, 130804, -58640, -235128,
    -307171, -228691, -26663, 206361, 354023, 333718,
    141721, -138313, -370885, -433641, -280929, 26732,
    345067, 513015, 433511, 127901, -265835, -554439,
    -583540, -319079, 126455, 540407, 710681, 533486,
    73786, -455646, -791729, -750941, -327874, 289741,
    802915, 945244, 619961, -39747, -722841, -1086017,
    -925155, -287541, 535804, 1141511, 1210422, 674040,
    -235155, -1082242, -1436720, -1089904, -173709, 885139,
    1562353, 1494396, 671193, -537829, -1547377, -1838274,
    -1222605, 42534, 1358734, 2067698, 1778868, 580955,
    -975625, -2129483, -2279066, -1293743, 394557, 1977334,
    2654870, 2038196, 366606, -1578521, -2836665, -2740487,
    -1266203, 920315, 2760994, 3315428, 2238513, -15434,
    -2378712, -3673441, -3196053, -1094270, 1663092, 3729249,
    4034611, 2336548, -617001, -3411666, -4640898, -3610428,
    -721739, 2673602, 4902443, 4791084, 2277607, -1501337,
    -4719034, -5737867, -3937909, -77973, 4014800, 6305127,
    5556925, 1991507, -2749855, -6355137, -6963731, -4119452,
    930373, 5772152, 7973361, 6297633, 1383976, -4476451,
    -8400605, -8324179, -4076100, 2437113, 8075411, 9969916,
    6971595, 317659, -6858597, -10991651, -9842993, -3693624,
    4656421, 11147096, 12417619, 7527572, -1432540, -10209633,
    -14387823, -11588338, -2784013, 7980627, 15421369, 15580852,
    7896015, -4296186, -15168259, -19150894, -13741295, -976199,
    13257501, 21885760, 20102797, 7959106, -9271207, -23300667,
    -26726439, -16821806, 2667492, 22786898, 33349412, 27916078,
    7424264, -19455236, -39748099, -42128538, -22784519, 11647761,
    45842582, 61989885, 48110024, 4918313, -52050913, -96590426,
    -101180371, -48168429, 61685977, 207012332, 351345742, 454707521,
    487116354, 438996761, 324538305, 176723188, 35919072, -63648249,
    -104531514, -90070795, -40723448, 15354502, 53471795, 60928870,
    39907927, 4204222, -28223957, -43412890, -36836268, -14173292,
    12405090, 30358161, 32401509, 19224749, -1616254, -19781868,
    -27110701, -21153111, -5801595, 11027904, 21370704, 20897967,
    10643866, -3873517, -15543453, -19087544, -13395381, -1760985,
    9950471, 16217217, 14428370, 5927089, -4864288, -12710955,
    -14078380, -8697452, 498065, 8939007, 12670361, 10185293,
    3002224, -5218458, -10522111, -10547643, -5561203, 1808027,
    7937213, 9979056, 7172498, 1097426, -5193802, -8699659,
    -7892302, -3369909, 2532922, 6940337, 7828829, 4947563,
    -148791, -4927234, -7128764, -5829874, -1817594, 2867352,
    5962039, 6069170, 3280824, -936614, -4506340, -5759238,
    -4209305, -728660, 2932647, 5022115, 4619710, 2036371,
    -1392959, -3994301, -4568388, -2939269, 11014, 2813557,
    4140733, 3431922, 1123516, -1607339, -3439582, -3544658,
    -1957213, 483679, 2573771, 3335335, 2471741, 475011,
    -1647785, -2879925, -2679799, -1214991, 753312, 2262892,
    2618942, 1711273, 36812, -1568251, -2344111, -1965092,
    -672032, 872044, 1919725, 1999375, 1124918, -236731,
    -1412146, -1852912, -1389728, -292264, 883169, 1573977,
    1479154, 687821, -385013, -1214096, -1419844, -940430,
    -42933, 822542, 1247329, 1055906, 375556, -441992,
    -1000943, -1051984, -601811, 105597, 719264, 954337,
    723142, 164478, -436440, -792494, -750925, -357136,
    179632, 596126, 703366, 471272, 32342, -392002,
    -602273, -513871, -189248, 201824, 470066, 497615,
    288711, -41031, -327311, -438352, -334804, -81501,
    190932, 352734, 336218, 162979, -73199, -256241,
    -304297, -205642, -18571, 161757, 251198, 215367,
    81689, -78735, -188339, -200166, -117313, 12935,
    125285, 168765, 129392, 33342, -69093, -129413,
    -123519, -60677, 24099, 89030, 105857, 71727,
    7907, -52705, -82237, -70367, -27239, 23552,
    57525, 60879, 35711, -2843, -35259, -47294,
    -35995, -9648, 17553, 32925, 31023, 15196,
    -5219, -20125, -23508, -15638, -1971, 10235,
    15626, 12950, 4940, -3692, -8855, -8908,
    -6859, -9483, -7377, -468, 8496, 14886,
    14469, 5949, -7663, -19870, -23663, -15342,
    2803, 22678, 33824, 28747, 7498, -21131,
    -42993, -45396, -24155, 12913, 48440, 63436,
    47176, 4018, -46896, -79850, -75293, -30924,
    34957, 90566, 105699, 67746, -9664, -90794,
    -133960, -112612, -30806, 75598, 154195, 161499,
    86418, -40688, -159542, -208141, -154626, -16656,
    142943, 244277, 229933, 96615, -98198, -260283,
    -303773, -195974, 21196, 246214, 364840, 307534,
    88808, -193184, -399912, -419947, -228060, 94982,
    395191, 518112, 387511, 50261, -338086, -584216,
    -552563, -238567, 219306, 599426, 703520, 459037,
    -35025, -546154, -816851, -693434, -211142, 410719,
    867277, 916660, 506669, -186142, -830602, -1098228,
    -829460, -125271, 687063, 1204790, 1148272, 509927,
    -424884, -1203594, -1424379, -941923, 43642, 1066648,
    1614538, 1383304, 443039, -775197, -1675152, -1785851,
    -1005911, 324055, 1567350, 2094471, 1600063, 274788,
    -1262570, -2252096, -2166698, -989820, 748061, 2205787,
    2636881, 1769442, -31667, -1913578, -2937161, -2543559,
    -854777, 1351395, 2996767, 3227531, 1854064, -519311,
    -2755856, -3728428, -2884731, -553670, 2174086, 3953322,
    3844959, 1807027, -1238650, -3819020, -4619270, -3148964,
    -29133, 3262480, 5087770, 4459859, 1569569, -2250938,
    -5137338, -5599025, -3283407, 790718, 4673963, 6414561,
    5034250, 1066304, -3635154, -6755740, -6654748, -3219436,
    2001309, 6487046, 7956401, 5519740, 195103, -5502771,
    -8742419, -7774713, -2863540, 3740913, 8822713, 9756897,
    5853237, -1195123, -8029760, -11215783, -8955208, -2076408,
    6233899, 11891842, 11908078, 5945893, -3356441, -11530937,
    -14406704, -10214985, -621017, 9896740, 16111545, 14617357,
    5652676, -6777789, -16655142, -18823040, -11631690, 1984033,
    15639272, 22440552, 18402565, 4676421, -12609917, -25008208,
    -25786853, -13460444, 6980859, 25954175, 33632394, 24845178,
    2172995, -24468420, -41918072, -39939644, -16711712, 19090734,
    51036049, 61807059, 41525521, -6105504, -62886236, -101479333,
    -95463384, -30345476, 88922804, 237273885, 376480934, 467511693,
    483815418, 420569416, 296372021, 146735451, 11858326, -76710726,
    -105611545, -82130299, -29139063, 25031329, 57556751, 58689698,
    33372346, -3094259, -32941492, -43791931, -33259133, -8733796,
    17022744, 32136593, 30821481, 15346736, -5785349, -22288848,
    -26941867, -18616177, -2272852, 13824696, 22187636, 19503657,
    7854367, -6650567, -17006276, -18639704, -11376096, 776033,
    11777122, 16517828, 13156387, 3779241, -6820895, -13563206,
    -13488067, -7027147, 2396326, 10153646, 12664096, 9028276,
    1305568, -6621116, -10981102, -9895090, -4165138, 3246098,
    8732175, 9786255, 6133835, -250695, -6195018, -8895329,
    -7229474, -2206329, 3619104, 7436204, 7527336, 4031048,
    -1214272, -5627349, -7147925, -5191801, -857691, 3676602,
    6242547, 5712700, 2487616, -1767930, -4978035, -5663850,
    -3619359, 51231, 3521947, 5149254, 4246244, 1364158,
    -2029419, -4293573, -4404134, -2412030, 632619, 3228913,
    4162002, 3068085, 566564, -2082765, -3611065, -3345426,
    -1500339, 967970, 2853549, 3287537, 2135410, 24644,
    -1992105, -2959643, -2470318, -830644, 1120744, 2439440,
    2530389, 1413387, -317884, -1808097, -2361020, -1762700,
    -358120, 1142326, 2020195, 1891340, 870916, -508110,
    -1570998, -1829889, -1205732, -43566, 1074859, 1620796,
    1366982, 478872, -586062, -1312264, -1374438, -781274,
    147860, 952614, 1258550, 949978, 209675, -585594,
    -1055536, -997093, -470130, 246961, 802745, 944004,
    629773, 37523, -534747, -817463, -695473, -252725,
    280409, 645851, 681921, 393562, -61108, -455966,
    -608554, -463489, -109939, 270587, 496575, 472377,
    227357, -106942, -366366, -434124, -292509, -23929,
    235504, 364311, 311898, 117006, -117491, -278150,
    -295317, -172494, 21189, 188904, 254033, 194610,
    49092, -106858, -199187, -190172, -93016, 38866,
    140555, 167206, 113302, 11618, -85756, -133714,
    -114659, -44097, 39882, 96733, 102721, 60348,
    -5538, -61732, -83127, -63609, -16838, 32344,
    60813, 57788, 28444, -10403, -39572, -46776,
    -31515, -3803, 21877, 33940, 28729, 11132,
    -8916, -21808, -22717, -13137, 806, 11964,
    15697, 11636, 3108, -5097, -9275, -8363,
    -7673, -9482, -6331, 1293, 10138, 15445,
    13381, 3463, -10458, -21491, -22989, -12310,
    6972, 25923, 34234, 25628, 1951, -26521,
    -45324, -42966, -17552, 20789, 53604, 62785,
    40266, -6347, -55723, -82313, -69301, -18567,
    48000, 97575, 102312, 54522, -26973, -103661,
    -135221, -100347, -9910, 95235, 162295, 152689,
    63519, -67291, -176516, -205807, -132312, 16085,
    170283, 251680, 211758, 59839, -136419, -280512,
    -294068, -158677, 69415, 281660, 368333, 274607,
    33224, -244954, -421178, -397413, -169692, 162323,
    437957, 512647, 332871, -29555, -404454, -602435,
    -509802, -152013, 308971, 646977, 681829, 374145,
    -144608, -626693, -825562, -620941, -88530, 524874,
    914704, 868917, 381531, -330599, -922716, -1088093,
    -715571, 41589, 826122, 1244170, 1061845, 333378,
    -608202, -1301756, -1382726, -772905, 262658, 1228444,
    1634280, 1242612, 203193, -999412, -1770095, -1696287,
    -766197, 602093, 1746216, 2078686, 1386553, -40354,
    -1526814, -2329968, -2008794, -662384, 1090045, 2391557,
    2564770, 1461663, -433478, -2213010, -2978641, -2292575,
    -421617, 1759287, 3173689, 3072744, 1427786, -1017695,
    -3080485, -3707750, -2511298, 3684, 2645763, 4098827,
    3574819, 1235294, -1841163, -4152359, -4503016, -2618574,
    670911, 3790492, 5170943, 4034224, 822483, -2961916,
    -5454770, -5344393, -2555363, 1651804, 5244105, 6393989,
    4403536, 110162, -4454935, -7022262, -6206697, -2244652,
    3042056, 7076541, 7776671, 4621184, -1009816, -6427085,
    -8909060, -7060696, -1579910, 4981821, 9397510, 9342202,
    4603361, -2699662, -9049411, -11213071, -7874599, -398813,
    7701586, 12401867, 11149207, 4224299, -5234273, -12632117,
    -14131142, -8615875, 1581561, 11634573, 16480921, 13342130,
    3263740, -9154408, -17821714, -18105132, -9253238, 4947699,
    17737042, 22544249, 16297735, 1243262, -15747391, -26233133,
    -24300920, -9758653, 11236556, 28653936, 33230360, 21193725,
    -3248394, -29104287, -43282460, -36864992, -10109213, 26382941,
    55357775, 60336319, 33797807, -17526690, -72991582, -104544149,
    -87317019, -10288695, 117367496, 267172685, 399647320, 477253854,
    477253854, 399647320, 267172685, 117367496, -10288695, -87317019,
    -104544149, -72991582, -17526690, 33797807, 60336319, 55357775,
    26382941, -10109213, -36864992, -43282460, -29104287, -3248394,
    21193725, 33230360, 28653936, 11236556, -9758653, -24300920,
    -26233133, -15747391, 1243262, 16297735, 22544249, 17737042,
    4947699, -9253238, -18105132, -17821714, -9154408, 3263740,
    13342130, 16480921, 11634573, 1581561, -8615875, -14131142,
    -12632117, -5234273, 4224299, 11149207, 12401867, 7701586,
    -398813, -7874599, -11213071, -9049411, -2699662, 4603361,
    9342202, 9397510, 4981821, -1579910, -7060696, -8909060,
    -6427085, -1009816, 4621184, 7776671, 7076541, 3042056,
    -2244652, -6206697, -7022262, -4454935, 110162, 4403536,
    6393989, 5244105, 1651804, -2555363, -5344393, -5454770,
    -2961916, 822483, 4034224, 5170943, 3790492, 670911,
    -2618574, -4503016, -4152359, -1841163, 1235294, 3574819,
    4098827, 2645763, 3684, -2511298, -3707750, -3080485,
    -1017695, 1427786, 3072744, 3173689, 1759287, -421617,
    -2292575, -2978641, -2213010, -433478, 1461663, 2564770,
    2391557, 1090045, -662384, -2008794, -2329968, -1526814,
    -40354, 1386553, 2078686, 1746216, 602093, -766197,
    -1696287, -1770095, -999412, 203193, 1242612, 1634280,
    1228444, 262658, -772905, -1382726, -1301756, -608202,
    333378, 1061845, 1244170, 826122, 41589, -715571,
    -1088093, -922716, -330599, 381531, 868917, 914704,
    524874, -88530, -620941, -825562, -626693, -144608,
    374145, 681829, 646977, 308971, -152013, -509802,
    -602435, -404454, -29555, 332871, 512647, 437957,
    162323, -169692, -397413, -421178, -244954, 33224,
    274607, 368333, 281660, 69415, -158677, -294068,
    -280512, -136419, 59839, 211758, 251680, 170283,
    16085, -132312, -205807, -176516, -67291, 63519,
    152689, 162295, 95235, -9910, -100347, -135221,
    -103661, -26973, 54522, 102312, 97575, 48000,
    -18567, -69301, -82313, -55723, -6347, 40266,
    62785, 53604, 20789, -17552, -42966, -45324,
    -26521, 1951, 25628, 34234, 25923, 6972,
    -12310, -22989, -21491, -10458, 3463, 13381,
    15445, 10138, 1293, -6331, -9482, -7673,
    -8363, -9275, -5097, 3108, 11636, 15697,
    11964, 806, -13137, -22717, -21808, -8916,
    11132, 28729, 33940, 21877, -3803, -31515,
    -46776, -39572, -10403, 28444, 57788, 60813,
    32344, -16838, -63609, -83127, -61732, -5538,
    60348, 102721, 96733, 39882, -44097, -114659,
    -133714, -85756, 11618, 113302, 167206, 140555,
    38866, -93016, -190172, -199187, -106858, 49092,
    194610, 254033, 188904, 21189, -172494, -295317,
    -278150, -117491, 117006, 311898, 364311, 235504,
    -23929, -292509, -434124, -366366, -106942, 227357,
    472377, 496575, 270587, -109939, -463489, -608554,
    -455966, -61108, 393562, 681921, 645851, 280409,
    -252725, -695473, -817463, -534747, 37523, 629773,
    944004, 802745, 246961, -470130, -997093, -1055536,
    -585594, 209675, 949978, 1258550, 952614, 147860,
    -781274, -1374438, -1312264, -586062, 478872, 1366982,
    1620796, 1074859, -43566, -1205732, -1829889, -1570998,
    -508110, 870916, 1891340, 2020195, 1142326, -358120,
    -1762700, -2361020, -1808097, -317884, 1413387, 2530389,
    2439440, 1120744, -830644, -2470318, -2959643, -1992105,
    24644, 2135410, 3287537, 2853549, 967970, -1500339,
    -3345426, -3611065, -2082765, 566564, 3068085, 4162002,
    3228913, 632619, -2412030, -4404134, -4293573, -2029419,
    1364158, 4246244, 5149254, 3521947, 51231, -3619359,
    -5663850, -4978035, -1767930, 2487616, 5712700, 6242547,
    3676602, -857691, -5191801, -7147925, -5627349, -1214272,
    4031048, 7527336, 7436204, 3619104, -2206329, -7229474,
    -8895329, -6195018, -250695, 6133835, 9786255, 8732175,
    3246098, -4165138, -9895090, -10981102, -6621116, 1305568,
    9028276, 12664096, 10153646, 2396326, -7027147, -13488067,
    -13563206, -6820895, 3779241, 13156387, 16517828, 11777122,
    776033, -11376096, -18639704, -17006276, -6650567, 7854367,
    19503657, 22187636, 13824696, -2272852, -18616177, -26941867,
    -22288848, -5785349, 15346736, 30821481, 32136593, 17022744,
    -8733796, -33259133, -43791931, -32941492, -3094259, 33372346,
    58689698, 57556751, 25031329, -29139063, -82130299, -105611545,
    -76710726, 11858326, 146735451, 296372021, 420569416, 483815418,
    467511693, 376480934, 237273885, 88922804, -30345476, -95463384,
    -101479333, -62886236, -6105504, 41525521, 61807059, 51036049,
    19090734, -16711712, -39939644, -41918072, -24468420, 2172995,
    24845178, 33632394, 25954175, 6980859, -13460444, -25786853,
    -25008208, -12609917, 4676421, 18402565, 22440552, 15639272,
    1984033, -11631690, -18823040, -16655142, -6777789, 5652676,
    14617357, 16111545, 9896740, -621017, -10214985, -14406704,
    -11530937, -3356441, 5945893, 11908078, 11891842, 6233899,
    -2076408, -8955208, -11215783, -8029760, -1195123, 5853237,
    9756897, 8822713, 3740913, -2863540, -7774713, -8742419,
    -5502771, 195103, 5519740, 7956401, 6487046, 2001309,
    -3219436, -6654748, -6755740, -3635154, 1066304, 5034250,
    6414561, 4673963, 790718, -3283407, -5599025, -5137338,
    -2250938, 1569569, 4459859, 5087770, 3262480, -29133,
    -3148964, -4619270, -3819020, -1238650, 1807027, 3844959,
    3953322, 2174086, -553670, -2884731, -3728428, -2755856,
    -519311, 1854064, 3227531, 2996767, 1351395, -854777,
    -2543559, -2937161, -1913578, -31667, 1769442, 2636881,
    2205787, 748061, -989820, -2166698, -2252096, -1262570,
    274788, 1600063, 2094471, 1567350, 324055, -1005911,
    -1785851, -1675152, -775197, 443039, 1383304, 1614538,
    1066648, 43642, -941923, -1424379, -1203594, -424884,
    509927, 1148272, 1204790, 687063, -125271, -829460,
    -1098228, -830602, -186142, 506669, 916660, 867277,
    410719, -211142, -693434, -816851, -546154, -35025,
    459037, 703520, 599426, 219306, -238567, -552563,
    -584216, -338086, 50261, 387511, 518112, 395191,
    94982, -228060, -419947, -399912, -193184, 88808,
    307534, 364840, 246214, 21196, -195974, -303773,
    -260283, -98198, 96615, 229933, 244277, 142943,
    -16656, -154626, -208141, -159542, -40688, 86418,
    161499, 154195, 75598, -30806, -112612, -133960,
    -90794, -9664, 67746, 105699, 90566, 34957,
    -30924, -75293, -79850, -46896, 4018, 47176,
    63436, 48440, 12913, -24155, -45396, -42993,
    -21131, 7498, 28747, 33824, 22678, 2803,
    -15342, -23663, -19870, -7663, 5949, 14469,
    14886, 8496, -468, -7377, -9483, -6859,
    -8908, -8855, -3692, 4940, 12950, 15626,
    10235, -1971, -15638, -23508, -20125, -5219,
    15196, 31023, 32925, 17553, -9648, -35995,
    -47294, -35259, -2843, 35711, 60879, 57525,
    23552, -27239, -70367, -82237, -52705, 7907,
    71727, 105857, 89030, 24099, -60677, -123519,
    -129413, -69093, 33342, 129392, 168765, 125285,
    12935, -117313, -200166, -188339, -78735, 81689,
    215367, 251198, 161757, -18571, -205642, -304297,
    -256241, -73199, 162979, 336218, 352734, 190932,
    -81501, -334804, -438352, -327311, -41031, 288711,
    497615, 470066, 201824, -189248, -513871, -602273,
    -392002, 32342, 471272, 703366, 596126, 179632,
    -357136, -750925, -792494, -436440, 164478, 723142,
    954337, 719264, 105597, -601811, -1051984, -1000943,
    -441992, 375556, 1055906, 1247329, 822542, -42933,
    -940430, -1419844, -1214096, -385013, 687821, 1479154,
    1573977, 883169, -292264, -1389728, -1852912, -1412146,
    -236731, 1124918, 1999375, 1919725, 872044, -672032,
    -1965092, -2344111, -1568251, 36812, 1711273, 2618942,
    2262892, 753312, -1214991, -2679799, -2879925, -1647785,
    475011, 2471741, 3335335, 2573771, 483679, -1957213,
    -3544658, -3439582, -1607339, 1123516, 3431922, 4140733,
    2813557, 11014, -2939269, -4568388, -3994301, -1392959,
    2036371, 4619710, 5022115, 2932647, -728660, -4209305,
    -5759238, -4506340, -936614, 3280824, 6069170, 5962039,
    2867352, -1817594, -5829874, -7128764, -4927234, -148791,
    4947563, 7828829, 6940337, 2532922, -3369909, -7892302,
    -8699659, -5193802, 1097426, 7172498, 9979056, 7937213,
    1808027, -5561203, -10547643, -10522111, -5218458, 3002224,
    10185293, 12670361, 8939007, 498065, -8697452, -14078380,
    -12710955, -4864288, 5927089, 14428370, 16217217, 9950471,
    -1760985, -13395381, -19087544, -15543453, -3873517, 10643866,
    20897967, 21370704, 11027904, -5801595, -21153111, -27110701,
    -19781868, -1616254, 19224749, 32401509, 30358161, 12405090,
    -14173292, -36836268, -43412890, -28223957, 4204222, 39907927,
    60928870, 53471795, 15354502, -40723448, -90070795, -104531514,
    -63648249, 35919072, 176723188, 324538305, 438996761, 487116354,
    454707521, 351345742, 207012332, 61685977, -48168429, -101180371,
    -96590426, -52050913, 4918313, 48110024, 61989885, 45842582,
    11647761, -22784519, -42128538, -39748099, -19455236, 7424264,
    27916078, 33349412, 22786898, 2667492, -16821806, -26726439,
    -23300667, -9271207, 7959106, 20102797, 21885760, 13257501,
    -976199, -13741295, -19150894, -15168259, -4296186, 7896015,
    15580852, 15421369, 7980627, -2784013, -11588338, -14387823,
    -10209633, -1432540, 7527572, 12417619, 11147096, 4656421,
    -3693624, -9842993, -10991651, -6858597, 317659, 6971595,
    9969916, 8075411, 2437113, -4076100, -8324179, -8400605,
    -4476451, 1383976, 6297633, 7973361, 5772152, 930373,
    -4119452, -6963731, -6355137, -2749855, 1991507, 5556925,
    6305127, 4014800, -77973, -3937909, -5737867, -4719034,
    -1501337, 2277607, 4791084, 4902443, 2673602, -721739,
    -3610428, -4640898, -3411666, -617001, 2336548, 4034611,
    3729249, 1663092, -1094270, -3196053, -3673441, -2378712,
    -15434, 2238513, 3315428, 2760994, 920315, -1266203,
    -2740487, -2836665, -1578521, 366606, 2038196, 2654870,
    1977334, 394557, -1293743, -2279066, -2129483, -975625,
    580955, 1778868, 2067698, 1358734, 42534, -1222605,
    -1838274, -1547377, -537829, 671193, 1494396, 1562353,
    885139, -173709, -1089904, -1436720, -1082242, -235155,
    674040, 1210422, 1141511, 535804, -287541, -925155,
    -1086017, -722841, -39747, 619961, 945244, 802915,
    289741, -327874, -750941, -791729, -455646, 73786,
    533486, 710681, 540407, 126455, -319079, -583540,
    -554439, -265835, 127901, 433511, 513015, 345067,
    26732, -280929, -433641, -370885, -138313, 141721,
    333718, 354023, 206361, -26663, -228691, -307171,
    -235128, -58640, 130804, 243140, 232061, 113196,
    -48472, -173408, -206222, -139655, -13761, 107133,
    166872, 143133, 54819, -50662, -122350, -130015,
    -76357, 7475, 79315, 106872, 81879, 21499,
    -42374, -79622, -75829, -37331, 14050, 52959,
    62786, 42428, 4981, -30092, -46840, -39854,
    -15465, 12732, 31189, 32739, 19074, -1288,
    -17960, -23831, -17902, -4813, 8220, 15218,
    14045, 6750, -2140, -8221, -9287, -5945,
];

pub static SRC_INT32_6_1_1134_5000: StageDescriptor = StageDescriptor {
    name: "int32_6_1_1134_5000",
    input_stride: 0,
    output_stride: 1,
    subfilter_count: 6,
    subfilter_length: 16,
    block_in: 1,
    block_out: 6,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_6_1_1134_5000_FIR),
};

static SRC_INT32_6_1_1134_5000_FIR: [i32; 96] = [
    135739, 1971673, -10007149, -1493544, 65339331, -87118135,
    -151047600, 696970487, 1311089930, 512720904, -195257582, -42180206,
    60233392, -9315905, -6698921, 1912050, 362286, 1577303,
    -13070685, 9305663, 62928860, -132469952, -74800108, 875496546,
    1262366525, 334292022, -210185041, -2268035, 49833562, -13992607,
    -3648176, 1579512, 705786, 563016, -15239269, 22387238,
    51260735, -172454638, 33721514, 1036409031, 1168520434, 171915503,
    -200568364, 29437808, 36491582, -15782387, -1178412, 1136503,
    1136503, -1178412, -15782387, 36491582, 29437808, -200568364,
    171915503, 1168520434, 1036409031, 33721514, -172454638, 51260735,
    22387238, -15239269, 563016, 705786, 1579512, -3648176,
    -13992607, 49833562, -2268035, -210185041, 334292022, 1262366525,
    875496546, -74800108, -132469952, 62928860, 9305663, -13070685,
    1577303, 362286, 1912050, -6698921, -9315905, 60233392,
    -42180206, -195257582, 512720904, 1311089930, 696970487, -151047600,
    -87118135, 65339331, -1493544, -10007149, 1971673, 135739,
];

pub static SRC_INT32_7_3_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_3_4535_5000",
    input_stride: 2,
    output_stride: 5,
    subfilter_count: 7,
    subfilter_length: 112,
    block_in: 3,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_3_4535_5000_FIR),
};

static SRC_INT32_7_3_4535_5000_FIR: [i32; 784] = [
    -29118, 51467, -81322, 118873, -163591, 214044,
    -267712, 320844, -368363, 403831, -419505, 406479,
    -354937, 254518, -94788, -134172, 441097, -832780,
    1313272, -1883064, 2538286, -3269968, 4063406, -4897668,
    5745298, -6572237, 7338003, -7996150, 8495013, -8778745,
    8788622, -8464602, 7747080, -6578800, 4906836, -2684589,
    -126314, 3554295, -7616383, 12317160, -17648202, 23588150,
    -30103536, 37150567, -44678141, 52632525, -60964507, 69640500,
    -78660666, 88090674, -98122746, 109207226, -122380043, 140254239,
    -171086272, 259097876, 2032025534, -43216243, -25651382, 48955303,
    -59602135, 64581349, -66323353, 65933876, -64022164, 60979471,
    -57089760, 52578642, -47636380, 42428941, -37103170, 31788988,
    -26600106, 21634073, -16972111, 12679021, -8803309, 5377609,
    -2419440, -67716, 2093039, -3676755, 4848335, -5644579,
    6107668, -6283222, 6218471, -5960553, 5555022, -5044576,
    4468040, -3859618, 3248402, -2658142, 2107244, -1608971,
    1171821, -800035, 494197, -251898, 68409, 62649,
    -148681, 197559, -217137, 214863, -197482, 170832,
    -139729, 107932, -78174, 52245, -20802, 40386,
    -69014, 108053, -158389, 220196, -292693, 373904,
    -460440, 547328, -627893, 693724, -734739, 739365,
    -694839, 587646, -404087, 130973, 243569, -729200,
    1332414, -2055557, 2895860, -3844540, 4886005, -5997220,
    7147268, -8297167, 9399943, -10401016, 11238882, -11846099,
    12150562, -12077009, 11548732, -10489391, 8824858, -6484966,
    3405029, 473030, -5200161, 10820531, -17373113, 24895045,
    -33427602, 43026197, -53776927, 65824428, -79420709, 95016026,
    -113442007, 136321327, -167122106, 214476456, -306638073, 616317459,
    1909778171, -267352241, 105170312, -42491687, 9138786, 11226452,
    -24437860, 33118517, -38645799, 41835593, -43223127, 43192039,
    -42038515, 40004863, -37297592, 34097189, -30563319, 26837428,
    -23043938, 19290713, -15669230, 12254716, -9106418, 6268098,
    -3768791, 1623833, 163852, -1602262, 2708657, -3507809,
    4030200, -4310255, 4384648, -4290740, 4065195, -3742798,
    3355502, -2931707, 2495782, -2067808, 1663533, -1294506,
    968362, -689233, 458235, -274011, 133285, -31419,
    -37084, 78109, -97545, 100965, -93392, 79135,
    -61709, 43810, -6865, 19869, -41938, 75431,
    -122554, 185131, -264328, 360367, -472218, 597309,
    -731261, 867673, -997983, 1111426, -1195109, 1234215,
    -1212369, 1112144, -915730, 605752, -166210, -416456,
    1152250, -2046447, 3098443, -4300664, 5637580, -7084893,
    8608927, -10166274, 11703725, -13158510, 14458841, -15524761,
    16269255, -16599568, 16418656, -15626635, 14122107, -11803123,
    8567550, -4312430, -1068177, 7687711, -15675290, 25189792,
    -36443831, 49745288, -65571983, 84713801, -108565237, 139794283,
    -184109796, 256035605, -405762025, 996581234, 1678534815, -401001668,
    202146466, -118641122, 71597782, -41075126, 19701013, -4116868,
    -7435439, 15978911, -22164677, 26442308, -29146265, 30542269,
    -30853032, 30272733, -28975069, 27117544, -24843532, 22283046,
    -19552805, 16755989, -13981922, 11305862, -8788986, 6478640,
    -4408872, 2601236, -1065856, -197309, 1197028, -1949263,
    2475583, -2801593, 2955429, -2966354, 2863520, -2674895,
    2426399, -2141240, 1839468, -1537715, 1249132, -983470,
    747310, -544383, 375971, -241349, 138242, -63276,
    12389, 18785, -34613, 39204, -36226, 28790,
    10688, -7193, -3777, 25203, -60283, 112236,
    -184056, 278211, -396305, 538719, -704232, 889665,
    -1089555, 1295893, -1497949, 1682211, -1832464, 1930029,
    -1954164, 1882660, -1692606, 1361333, -867508, 192358,
    679014, -1756265, 3042451, -4532718, 6213104, -8059504,
    10036855, -12098567, 14186248, -16229725, 18147362, -19846651,
    21225000, -22170645, 22563530, -22275962, 21172739, -19110347,
    15934589, -11475681, 5539236, 2109557, -11773462, 23871803,
    -39029478, 58249372, -83273601, 117426445, -167901121, 253531573,
    -443643440, 1363086461, 1363086461, -443643440, 253531573, -167901121,
    117426445, -83273601, 58249372, -39029478, 23871803, -11773462,
    2109557, 5539236, -11475681, 15934589, -19110347, 21172739,
    -22275962, 22563530, -22170645, 21225000, -19846651, 18147362,
    -16229725, 14186248, -12098567, 10036855, -8059504, 6213104,
    -4532718, 3042451, -1756265, 679014, 192358, -867508,
    1361333, -1692606, 1882660, -1954164, 1930029, -1832464,
    1682211, -1497949, 1295893, -1089555, 889665, -704232,
    538719, -396305, 278211, -184056, 112236, -60283,
    25203, -3777, -7193, 10688, 28790, -36226,
    39204, -34613, 18785, 12389, -63276, 138242,
    -241349, 375971, -544383, 747310, -983470, 1249132,
    -1537715, 1839468, -2141240, 2426399, -2674895, 2863520,
    -2966354, 2955429, -2801593, 2475583, -1949263, 1197028,
    -197309, -1065856, 2601236, -4408872, 6478640, -8788986,
    11305862, -13981922, 16755989, -19552805, 22283046, -24843532,
    27117544, -28975069, 30272733, -30853032, 30542269, -29146265,
    26442308, -22164677, 15978911, -7435439, -4116868, 19701013,
    -41075126, 71597782, -118641122, 202146466, -401001668, 1678534815,
    996581234, -405762025, 256035605, -184109796, 139794283, -108565237,
    84713801, -65571983, 49745288, -36443831, 25189792, -15675290,
    7687711, -1068177, -4312430, 8567550, -11803123, 14122107,
    -15626635, 16418656, -16599568, 16269255, -15524761, 14458841,
    -13158510, 11703725, -10166274, 8608927, -7084893, 5637580,
    -4300664, 3098443, -2046447, 1152250, -416456, -166210,
    605752, -915730, 1112144, -1212369, 1234215, -1195109,
    1111426, -997983, 867673, -731261, 597309, -472218,
    360367, -264328, 185131, -122554, 75431, -41938,
    19869, -6865, 43810, -61709, 79135, -93392,
    100965, -97545, 78109, -37084, -31419, 133285,
    -274011, 458235, -689233, 968362, -1294506, 1663533,
    -2067808, 2495782, -2931707, 3355502, -3742798, 4065195,
    -4290740, 4384648, -4310255, 4030200, -3507809, 2708657,
    -1602262, 163852, 1623833, -3768791, 6268098, -9106418,
    12254716, -15669230, 19290713, -23043938, 26837428, -30563319,
    34097189, -37297592, 40004863, -42038515, 43192039, -43223127,
    41835593, -38645799, 33118517, -24437860, 11226452, 9138786,
    -42491687, 105170312, -267352241, 1909778171, 616317459, -306638073,
    214476456, -167122106, 136321327, -113442007, 95016026, -79420709,
    65824428, -53776927, 43026197, -33427602, 24895045, -17373113,
    10820531, -5200161, 473030, 3405029, -6484966, 8824858,
    -10489391, 11548732, -12077009, 12150562, -11846099, 11238882,
    -10401016, 9399943, -8297167, 7147268, -5997220, 4886005,
    -3844540, 2895860, -2055557, 1332414, -729200, 243569,
    130973, -404087, 587646, -694839, 739365, -734739,
    693724, -627893, 547328, -460440, 373904, -292693,
    220196, -158389, 108053, -69014, 40386, -20802,
    52245, -78174, 107932, -139729, 170832, -197482,
    214863, -217137, 197559, -148681, 62649, 68409,
    -251898, 494197, -800035, 1171821, -1608971, 2107244,
    -2658142, 3248402, -3859618, 4468040, -5044576, 5555022,
    -5960553, 6218471, -6283222, 6107668, -5644579, 4848335,
    -3676755, 2093039, -67716, -2419440, 5377609, -8803309,
    12679021, -16972111, 21634073, -26600106, 31788988, -37103170,
    42428941, -47636380, 52578642, -57089760, 60979471, -64022164,
    65933876, -66323353, 64581349, -59602135, 48955303, -25651382,
    -43216243, 2032025534, 259097876, -171086272, 140254239, -122380043,
    109207226, -98122746, 88090674, -78660666, 69640500, -60964507,
    52632525, -44678141, 37150567, -30103536, 23588150, -17648202,
    12317160, -7616383, 3554295, -126314, -2684589, 4906836,
    -6578800, 7747080, -8464602, 8788622, -8778745, 8495013,
    -7996150, 7338003, -6572237, 5745298, -4897668, 4063406,
    -3269968, 2538286, -1883064, 1313272, -832780, 441097,
    -134172, -94788, 254518, -354937, 406479, -419505,
    403831, -368363, 320844, -267712, 214044, -163591,
    118873, -81322, 51467, -29118,
];

pub static SRC_INT32_7_5_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_5_4535_5000",
    input_stride: 2,
    output_stride: 3,
    subfilter_count: 7,
    subfilter_length: 112,
    block_in: 5,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_5_4535_5000_FIR),
};

static SRC_INT32_7_5_4535_5000_FIR: [i32; 784] = [
    -29118, 51467, -81322, 118873, -163591, 214044,
    -267712, 320844, -368363, 403831, -419505, 406479,
    -354937, 254518, -94788, -134172, 441097, -832780,
    1313272, -1883064, 2538286, -3269968, 4063406, -4897668,
    5745298, -6572237, 7338003, -7996150, 8495013, -8778745,
    8788622, -8464602, 7747080, -6578800, 4906836, -2684589,
    -126314, 3554295, -7616383, 12317160, -17648202, 23588150,
    -30103536, 37150567, -44678141, 52632525, -60964507, 69640500,
    -78660666, 88090674, -98122746, 109207226, -122380043, 140254239,
    -171086272, 259097876, 2032025534, -43216243, -25651382, 48955303,
    -59602135, 64581349, -66323353, 65933876, -64022164, 60979471,
    -57089760, 52578642, -47636380, 42428941, -37103170, 31788988,
    -26600106, 21634073, -16972111, 12679021, -8803309, 5377609,
    -2419440, -67716, 2093039, -3676755, 4848335, -5644579,
    6107668, -6283222, 6218471, -5960553, 5555022, -5044576,
    4468040, -3859618, 3248402, -2658142, 2107244, -1608971,
    1171821, -800035, 494197, -251898, 68409, 62649,
    -148681, 197559, -217137, 214863, -197482, 170832,
    -139729, 107932, -78174, 52245, -20802, 40386,
    -69014, 108053, -158389, 220196, -292693, 373904,
    -460440, 547328, -627893, 693724, -734739, 739365,
    -694839, 587646, -404087, 130973, 243569, -729200,
    1332414, -2055557, 2895860, -3844540, 4886005, -5997220,
    7147268, -8297167, 9399943, -10401016, 11238882, -11846099,
    12150562, -12077009, 11548732, -10489391, 8824858, -6484966,
    3405029, 473030, -5200161, 10820531, -17373113, 24895045,
    -33427602, 43026197, -53776927, 65824428, -79420709, 95016026,
    -113442007, 136321327, -167122106, 214476456, -306638073, 616317459,
    1909778171, -267352241, 105170312, -42491687, 9138786, 11226452,
    -24437860, 33118517, -38645799, 41835593, -43223127, 43192039,
    -42038515, 40004863, -37297592, 34097189, -30563319, 26837428,
    -23043938, 19290713, -15669230, 12254716, -9106418, 6268098,
    -3768791, 1623833, 163852, -1602262, 2708657, -3507809,
    4030200, -4310255, 4384648, -4290740, 4065195, -3742798,
    3355502, -2931707, 2495782, -2067808, 1663533, -1294506,
    968362, -689233, 458235, -274011, 133285, -31419,
    -37084, 78109, -97545, 100965, -93392, 79135,
    -61709, 43810, -6865, 19869, -41938, 75431,
    -122554, 185131, -264328, 360367, -472218, 597309,
    -731261, 867673, -997983, 1111426, -1195109, 1234215,
    -1212369, 1112144, -915730, 605752, -166210, -416456,
    1152250, -2046447, 3098443, -4300664, 5637580, -7084893,
    8608927, -10166274, 11703725, -13158510, 14458841, -15524761,
    16269255, -16599568, 16418656, -15626635, 14122107, -11803123,
    8567550, -4312430, -1068177, 7687711, -15675290, 25189792,
    -36443831, 49745288, -65571983, 84713801, -108565237, 139794283,
    -184109796, 256035605, -405762025, 996581234, 1678534815, -401001668,
    202146466, -118641122, 71597782, -41075126, 19701013, -4116868,
    -7435439, 15978911, -22164677, 26442308, -29146265, 30542269,
    -30853032, 30272733, -28975069, 27117544, -24843532, 22283046,
    -19552805, 16755989, -13981922, 11305862, -8788986, 6478640,
    -4408872, 2601236, -1065856, -197309, 1197028, -1949263,
    2475583, -2801593, 2955429, -2966354, 2863520, -2674895,
    2426399, -2141240, 1839468, -1537715, 1249132, -983470,
    747310, -544383, 375971, -241349, 138242, -63276,
    12389, 18785, -34613, 39204, -36226, 28790,
    10688, -7193, -3777, 25203, -60283, 112236,
    -184056, 278211, -396305, 538719, -704232, 889665,
    -1089555, 1295893, -1497949, 1682211, -1832464, 1930029,
    -1954164, 1882660, -1692606, 1361333, -867508, 192358,
    679014, -1756265, 3042451, -4532718, 6213104, -8059504,
    10036855, -12098567, 14186248, -16229725, 18147362, -19846651,
    21225000, -22170645, 22563530, -22275962, 21172739, -19110347,
    15934589, -11475681, 5539236, 2109557, -11773462, 23871803,
    -39029478, 58249372, -83273601, 117426445, -167901121, 253531573,
    -443643440, 1363086461, 1363086461, -443643440, 253531573, -167901121,
    117426445, -83273601, 58249372, -39029478, 23871803, -11773462,
    2109557, 5539236, -11475681, 15934589, -19110347, 21172739,
    -22275962, 22563530, -22170645, 21225000, -19846651, 18147362,
    -16229725, 14186248, -12098567, 10036855, -8059504, 6213104,
    -4532718, 3042451, -1756265, 679014, 192358, -867508,
    1361333, -1692606, 1882660, -1954164, 1930029, -1832464,
    1682211, -1497949, 1295893, -1089555, 889665, -704232,
    538719, -396305, 278211, -184056, 112236, -60283,
    25203, -3777, -7193, 10688, 28790, -36226,
    39204, -34613, 18785, 12389, -63276, 138242,
    -241349, 375971, -544383, 747310, -983470, 1249132,
    -1537715, 1839468, -2141240, 2426399, -2674895, 2863520,
    -2966354, 2955429, -2801593, 2475583, -1949263, 1197028,
    -197309, -1065856, 2601236, -4408872, 6478640, -8788986,
    11305862, -13981922, 16755989, -19552805, 22283046, -24843532,
    27117544, -28975069, 30272733, -30853032, 30542269, -29146265,
    26442308, -22164677, 15978911, -7435439, -4116868, 19701013,
    -41075126, 71597782, -118641122, 202146466, -401001668, 1678534815,
    996581234, -405762025, 256035605, -184109796, 139794283, -108565237,
    84713801, -65571983, 49745288, -36443831, 25189792, -15675290,
    7687711, -1068177, -4312430, 8567550, -11803123, 14122107,
    -15626635, 16418656, -16599568, 16269255, -15524761, 14458841,
    -13158510, 11703725, -10166274, 8608927, -7084893, 5637580,
    -4300664, 3098443, -2046447, 1152250, -416456, -166210,
    605752, -915730, 1112144, -1212369, 1234215, -1195109,
    1111426, -997983, 867673, -731261, 597309, -472218,
    360367, -264328, 185131, -122554, 75431, -41938,
    19869, -6865, 43810, -61709, 79135, -93392,
    100965, -97545, 78109, -37084, -31419, 133285,
    -274011, 458235, -689233, 968362, -1294506, 1663533,
    -2067808, 2495782, -2931707, 3355502, -3742798, 4065195,
    -4290740, 4384648, -4310255, 4030200, -3507809, 2708657,
    -1602262, 163852, 1623833, -3768791, 6268098, -9106418,
    12254716, -15669230, 19290713, -23043938, 26837428, -30563319,
    34097189, -37297592, 40004863, -42038515, 43192039, -43223127,
    41835593, -38645799, 33118517, -24437860, 11226452, 9138786,
    -42491687, 105170312, -267352241, 1909778171, 616317459, -306638073,
    214476456, -167122106, 136321327, -113442007, 95016026, -79420709,
    65824428, -53776927, 43026197, -33427602, 24895045, -17373113,
    10820531, -5200161, 473030, 3405029, -6484966, 8824858,
    -10489391, 11548732, -12077009, 12150562, -11846099, 11238882,
    -10401016, 9399943, -8297167, 7147268, -5997220, 4886005,
    -3844540, 2895860, -2055557, 1332414, -729200, 243569,
    130973, -404087, 587646, -694839, 739365, -734739,
    693724, -627893, 547328, -460440, 373904, -292693,
    220196, -158389, 108053, -69014, 40386, -20802,
    52245, -78174, 107932, -139729, 170832, -197482,
    214863, -217137, 197559, -148681, 62649, 68409,
    -251898, 494197, -800035, 1171821, -1608971, 2107244,
    -2658142, 3248402, -3859618, 4468040, -5044576, 5555022,
    -5960553, 6218471, -6283222, 6107668, -5644579, 4848335,
    -3676755, 2093039, -67716, -2419440, 5377609, -8803309,
    12679021, -16972111, 21634073, -26600106, 31788988, -37103170,
    42428941, -47636380, 52578642, -57089760, 60979471, -64022164,
    65933876, -66323353, 64581349, -59602135, 48955303, -25651382,
    -43216243, 2032025534, 259097876, -171086272, 140254239, -122380043,
    109207226, -98122746, 88090674, -78660666, 69640500, -60964507,
    52632525, -44678141, 37150567, -30103536, 23588150, -17648202,
    12317160, -7616383, 3554295, -126314, -2684589, 4906836,
    -6578800, 7747080, -8464602, 8788622, -8778745, 8495013,
    -7996150, 7338003, -6572237, 5745298, -4897668, 4063406,
    -3269968, 2538286, -1883064, 1313272, -832780, 441097,
    -134172, -94788, 254518, -354937, 406479, -419505,
    403831, -368363, 320844, -267712, 214044, -163591,
    118873, -81322, 51467, -29118,
];

pub static SRC_INT32_7_8_1361_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_8_1361_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 7,
    subfilter_length: 16,
    block_in: 8,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_8_1361_5000_FIR),
};

static SRC_INT32_7_8_1361_5000_FIR: [i32; 112] = [
    287035, -1221418, -8689342, 21390468, 37567096, -128886998,
    -65275385, 699552116, 1191808710, 570044292, -118785491, -100492234,
    45114123, 13733562, -8450187, -441990, 406088, -2257770,
    -8048612, 29303618, 24983158, -153238262, 6090285, 823443262,
    1164419891, 440143414, -154657801, -70648511, 48052056, 6862305,
    -7582427, 82699, 491897, -3516298, -6299110, 36782128,
    7282614, -170743119, 94561338, 936492593, 1110916203, 314787981,
    -173978471, -41608708, 47066271, 1132891, -6331866, 381766,
    500752, -4917324, -3266829, 43004081, -15189389, -178556152,
    198377114, 1033768014, 1033768014, 198377114, -178556152, -15189389,
    43004081, -3266829, -4917324, 500752, 381766, -6331866,
    1132891, 47066271, -41608708, -173978471, 314787981, 1110916203,
    936492593, 94561338, -170743119, 7282614, 36782128, -6299110,
    -3516298, 491897, 82699, -7582427, 6862305, 48052056,
    -70648511, -154657801, 440143414, 1164419891, 823443262, 6090285,
    -153238262, 24983158, 29303618, -8048612, -2257770, 406088,
    -441990, -8450187, 13733562, 45114123, -100492234, -118785491,
    570044292, 1191808710, 699552116, -65275385, -128886998, 37567096,
    21390468, -8689342, -1221418, 287035,
];

pub static SRC_INT32_7_8_2468_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_8_2468_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 7,
    subfilter_length: 24,
    block_in: 8,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_8_2468_5000_FIR),
};

static SRC_INT32_7_8_2468_5000_FIR: [i32; 168] = [
    -109716, -428273, 2977523, -3465788, -7598402, 25830783,
    -17137108, -46471282, 113644755, -50097213, -235034137, 679990587,
    1398068076, 501098275, -264865088, 3847397, 95216131, -56660059,
    -4225167, 22184211, -9751920, -1404277, 2512253, -554956,
    -203218, -178864, 3218357, -5645410, -4204592, 27506081,
    -30394567, -30294234, 123798629, -107445765, -176586782, 855638345,
    1356861719, 327578494, -268402084, 50459895, 71079944, -60746894,
    7266889, 17181670, -10677753, 368192, 1920563, -579087,
    -315397, 200972, 3139810, -7719890, 307273, 26698950,
    -42725334, -8845826, 123540303, -163399343, -88899017, 1019183091,
    1276733350, 167271540, -249379853, 86880596, 43970685, -59158717,
    16533160, 11471258, -10501022, 1740829, 1292410, -527978,
    -431006, 701583, 2663313, -9429438, 5669219, 23073634,
    -52760360, 16542293, 111416500, -212577190, 26778138, 1162094690,
    1162094690, 26778138, -212577190, 111416500, 16542293, -52760360,
    23073634, 5669219, -9429438, 2663313, 701583, -431006,
    -527978, 1292410, 1740829, -10501022, 11471258, 16533160,
    -59158717, 43970685, 86880596, -249379853, 167271540, 1276733350,
    1019183091, -88899017, -163399343, 123540303, -8845826, -42725334,
    26698950, 307273, -7719890, 3139810, 200972, -315397,
    -579087, 1920563, 368192, -10677753, 17181670, 7266889,
    -60746894, 71079944, 50459895, -268402084, 327578494, 1356861719,
    855638345, -176586782, -107445765, 123798629, -30294234, -30394567,
    27506081, -4204592, -5645410, 3218357, -178864, -203218,
    -554956, 2512253, -1404277, -9751920, 22184211, -4225167,
    -56660059, 95216131, 3847397, -264865088, 501098275, 1398068076,
    679990587, -235034137, -50097213, 113644755, -46471282, -17137108,
    25830783, -7598402, -3465788, 2977523, -428273, -109716,
];

pub static SRC_INT32_7_8_2721_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_8_2721_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 7,
    subfilter_length: 28,
    block_in: 8,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_8_2721_5000_FIR),
};

static SRC_INT32_7_8_2721_5000_FIR: [i32; 196] = [
    -146528, 517109, 350593, -3925713, 6470676, 1449168,
    -21558334, 31948430, 959180, -74670603, 114728897, -13390676,
    -269148902, 667161791, 1445124109, 476275735, -289333009, 43466568,
    86330076, -79794637, 17171504, 22908083, -22109183, 5246808,
    4302938, -3783938, 787855, 297633, -168568, 745845,
    -255258, -3646683, 8342085, -3131353, -18689371, 38938042,
    -17374533, -61452787, 135181899, -76774985, -217741922, 855960158,
    1400107589, 292891851, -281457427, 89723913, 53353750, -77234288,
    30030662, 12883004, -20586890, 8017493, 2091912, -3311737,
    1047436, 110655, -163850, 951899, -995766, -2888822,
    9652495, -8125570, -13470323, 42886099, -36231148, -40492488,
    144689636, -141471134, -133852499, 1032733405, 1312677991, 125635524,
    -250227761, 122653143, 19209115, -68044756, 38745423, 2906250,
    -17399980, 9649113, 55503, -2617029, 1141325, -30238,
    -120649, 1097142, -1810987, -1640025, 10154423, -13061245,
    -6115056, 42990508, -53765506, -12953744, 140949474, -201439041,
    -18359663, 1187857662, 1187857662, -18359663, -201439041, 140949474,
    -12953744, -53765506, 42990508, -6115056, -13061245, 10154423,
    -1640025, -1810987, 1097142, -120649, -30238, 1141325,
    -2617029, 55503, 9649113, -17399980, 2906250, 38745423,
    -68044756, 19209115, 122653143, -250227761, 125635524, 1312677991,
    1032733405, -133852499, -141471134, 144689636, -40492488, -36231148,
    42886099, -13470323, -8125570, 9652495, -2888822, -995766,
    951899, -163850, 110655, 1047436, -3311737, 2091912,
    8017493, -20586890, 12883004, 30030662, -77234288, 53353750,
    89723913, -281457427, 292891851, 1400107589, 855960158, -217741922,
    -76774985, 135181899, -61452787, -17374533, 38938042, -18689371,
    -3131353, 8342085, -3646683, -255258, 745845, -168568,
    297633, 787855, -3783938, 4302938, 5246808, -22109183,
    22908083, 17171504, -79794637, 86330076, 43466568, -289333009,
    476275735, 1445124109, 667161791, -269148902, -13390676, 114728897,
    -74670603, 959180, 31948430, -21558334, 1449168, 6470676,
    -3925713, 350593, 517109, -146528,
];

pub static SRC_INT32_7_8_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_7_8_4535_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 7,
    subfilter_length: 124,
    block_in: 8,
    block_out: 7,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_7_8_4535_5000_FIR),
};

static SRC_INT32_7_8_4535_5000_FIR: [i32; 868] = [
    -26410, 24015, -186, -48321, 112996, -171618,
    192128, -142890, 7266, 202298, -436947, 616449,
    -648952, 462602, -40497, -553512, 1170988, -1605220,
    1646989, -1157941, 140067, 1224550, -2585698, 3498009,
    -3545252, 2486201, -377904, -2370285, 5045834, -6792264,
    6850612, -4822421, 874032, 4195220, -9070106, 12221694,
    -12336099, 8760740, -1833676, -7026489, 15541156, -21091965,
    21438190, -15452970, 3665288, 11583060, -26475403, 36539180,
    -37795270, 27974258, -7482153, -20175850, 48697003, -70022653,
    75943600, -59927262, 18725789, 46690361, -131297329, 227850916,
    -332667340, 478190018, 1781215434, 208501639, -247734715, 216317636,
    -156652634, 87329285, -22196823, -28535103, 58999953, -68031747,
    58718085, -37190218, 10937915, 12952816, -29248311, 35415851,
    -31751755, 20848671, -6610409, -6894211, 16443852, -20318262,
    18484720, -12338733, 4128548, 3745536, -9361303, 11684526,
    -10687356, 7189755, -2508338, -1965555, 5137020, -6438973,
    5886030, -3966556, 1429254, 960494, -2624040, 3285308,
    -2983969, 2001641, -737775, -421097, 1201613, -1491914,
    1335454, -883556, 328921, 156969, -465686, 565774,
    -491345, 314796, -115585, -44668, 134922, -154636,
    124384, -72666, 24235, 6713, -32421, 39816,
    -27157, -14582, 84107, -164913, 225534, -226957,
    136682, 54167, -316915, 581631, -748802, 717049,
    -421294, -130006, 833072, -1495390, 1876697, -1759378,
    1031192, 245744, -1807650, 3223778, -3996846, 3711145,
    -2189752, -389701, 3468616, -6199122, 7649745, -7082820,
    4229391, 526719, -6132381, 11054506, -13656033, 12677448,
    -7695197, -587552, 10336623, -18921675, 23550123, -22064542,
    13697755, 440890, -17332762, 32555030, -41270051, 39504659,
    -25420249, 239237, 31455075, -62194372, 82836152, -84263194,
    59143405, -3168837, -85052803, 207339972, -381438659, 767736098,
    1698872656, -23117412, -141721593, 177183698, -159270127, 113871397,
    -58105533, 5368756, 34695238, -56845930, 60396949, -48592767,
    27312562, -3407953, -16938327, 29476979, -32542506, 27018644,
    -15716411, 2390088, 9324374, -16781289, 18821591, -15825337,
    9372138, -1652715, -5182396, 9561653, -10798010, 9118546,
    -5453810, 1079862, 2769729, -5215230, 5896180, -4971804,
    2984661, -647725, -1374511, 2631069, -2961103, 2477983,
    -1482917, 345463, 609707, -1179849, 1311202, -1079130,
    637109, -155838, -227981, 440804, -476163, 378325,
    -215542, 53472, 63270, -117962, 118074, -85096,
    43006, -9539, -34269, 51496, -52873, 24392,
    40530, -133708, 228610, -283759, 254376, -110340,
    -144870, 461815, -746759, 881503, -759683, 330797,
    362343, -1168792, 1849485, -2134842, 1809799, -803523,
    -746453, 2484580, -3899192, 4452429, -3750641, 1707748,
    1354267, -4714798, 7394929, -8411129, 7084477, -3318122,
    -2251322, 8300963, -13091103, 14915738, -12629271, 6102445,
    3543652, -14035687, 22407632, -25748812, 22070877, -11062538,
    -5503031, 23880633, -39038312, 45818698, -40338330, 21294125,
    9166797, -45278189, 78288347, -97780252, 93318584, -55781421,
    -22806797, 154243898, -381218577, 1055983637, 1541046365, -202985784,
    -30218299, 117936001, -140370056, 123576496, -84419514, 37098460,
    6608143, -38312333, 53782178, -53005197, 39468572, -18835349,
    -2651964, 19664659, -28858062, 29329124, -22436222, 11110127,
    1108797, -11035661, 16571921, -17055307, 13197252, -6684601,
    -403334, 6185859, -9427362, 9746489, -7571153, 3891558,
    91568, -3314009, 5099699, -5266543, 4083415, -2115877,
    21727, 1639575, -2534773, 2599178, -1998437, 1035952,
    -42241, -719587, 1109378, -1119354, 844790, -432861,
    29148, 262316, -397156, 386972, -280357, 138187,
    -12117, -68002, 96310, -84944, 54107, -22612,
    -31063, 56774, -73334, 63281, -12519, -80733,
    198803, -303300, 342646, -268488, 57335, 269732,
    -638026, 928172, -1005461, 764921, -179905, -662902,
    1558974, -2222355, 2361335, -1777230, 457738, 1368948,
    -3247680, 4589535, -4832212, 3629758, -1015413, -2521901,
    6091184, -8593428, 9023116, -6802990, 2052787, 4305509,
    -10670331, 15116388, -15917827, 12109683, -3924441, -7049869,
    18086251, -25911187, 27564125, -21320519, 7424976, 11603602,
    -31248864, 45872125, -50043279, 40047132, -15208232, -21309388,
    62459254, -98058279, 116081200, -103884674, 47950088, 72363686,
    -323024562, 1320774139, 1320774139, -323024562, 72363686, 47950088,
    -103884674, 116081200, -98058279, 62459254, -21309388, -15208232,
    40047132, -50043279, 45872125, -31248864, 11603602, 7424976,
    -21320519, 27564125, -25911187, 18086251, -7049869, -3924441,
    12109683, -15917827, 15116388, -10670331, 4305509, 2052787,
    -6802990, 9023116, -8593428, 6091184, -2521901, -1015413,
    3629758, -4832212, 4589535, -3247680, 1368948, 457738,
    -1777230, 2361335, -2222355, 1558974, -662902, -179905,
    764921, -1005461, 928172, -638026, 269732, 57335,
    -268488, 342646, -303300, 198803, -80733, -12519,
    63281, -73334, 56774, -31063, -22612, 54107,
    -84944, 96310, -68002, -12117, 138187, -280357,
    386972, -397156, 262316, 29148, -432861, 844790,
    -1119354, 1109378, -719587, -42241, 1035952, -1998437,
    2599178, -2534773, 1639575, 21727, -2115877, 4083415,
    -5266543, 5099699, -3314009, 91568, 3891558, -7571153,
    9746489, -9427362, 6185859, -403334, -6684601, 13197252,
    -17055307, 16571921, -11035661, 1108797, 11110127, -22436222,
    29329124, -28858062, 19664659, -2651964, -18835349, 39468572,
    -53005197, 53782178, -38312333, 6608143, 37098460, -84419514,
    123576496, -140370056, 117936001, -30218299, -202985784, 1541046365,
    1055983637, -381218577, 154243898, -22806797, -55781421, 93318584,
    -97780252, 78288347, -45278189, 9166797, 21294125, -40338330,
    45818698, -39038312, 23880633, -5503031, -11062538, 22070877,
    -25748812, 22407632, -14035687, 3543652, 6102445, -12629271,
    14915738, -13091103, 8300963, -2251322, -3318122, 7084477,
    -8411129, 7394929, -4714798, 1354267, 1707748, -3750641,
    4452429, -3899192, 2484580, -746453, -803523, 1809799,
    -2134842, 1849485, -1168792, 362343, 330797, -759683,
    881503, -746759, 461815, -144870, -110340, 254376,
    -283759, 228610, -133708, 40530, 24392, -52873,
    51496, -34269, -9539, 43006, -85096, 118074,
    -117962, 63270, 53472, -215542, 378325, -476163,
    440804, -227981, -155838, 637109, -1079130, 1311202,
    -1179849, 609707, 345463, -1482917, 2477983, -2961103,
    2631069, -1374511, -647725, 2984661, -4971804, 5896180,
    -5215230, 2769729, 1079862, -5453810, 9118546, -10798010,
    9561653, -5182396, -1652715, 9372138, -15825337, 18821591,
    -16781289, 9324374, 2390088, -15716411, 27018644, -32542506,
    29476979, -16938327, -3407953, 27312562, -48592767, 60396949,
    -56845930, 34695238, 5368756, -58105533, 113871397, -159270127,
    177183698, -141721593, -23117412, 1698872656, 767736098, -381438659,
    207339972, -85052803, -3168837, 59143405, -84263194, 82836152,
    -62194372, 31455075, 239237, -25420249, 39504659, -41270051,
    32555030, -17332762, 440890, 13697755, -22064542, 23550123,
    -18921675, 10336623, -587552, -7695197, 12677448, -13656033,
    11054506, -6132381, 526719, 4229391, -7082820, 7649745,
    -6199122, 3468616, -389701, -2189752, 3711145, -3996846,
    3223778, -1807650, 245744, 1031192, -1759378, 1876697,
    -1495390, 833072, -130006, -421294, 717049, -748802,
    581631, -316915, 54167, 136682, -226957, 225534,
    -164913, 84107, -14582, -27157, 39816, -32421,
    6713, 24235, -72666, 124384, -154636, 134922,
    -44668, -115585, 314796, -491345, 565774, -465686,
    156969, 328921, -883556, 1335454, -1491914, 1201613,
    -421097, -737775, 2001641, -2983969, 3285308, -2624040,
    960494, 1429254, -3966556, 5886030, -6438973, 5137020,
    -1965555, -2508338, 7189755, -10687356, 11684526, -9361303,
    3745536, 4128548, -12338733, 18484720, -20318262, 16443852,
    -6894211, -6610409, 20848671, -31751755, 35415851, -29248311,
    12952816, 10937915, -37190218, 58718085, -68031747, 58999953,
    -28535103, -22196823, 87329285, -156652634, 216317636, -247734715,
    208501639, 1781215434, 478190018, -332667340, 227850916, -131297329,
    46690361, 18725789, -59927262, 75943600, -70022653, 48697003,
    -20175850, -7482153, 27974258, -37795270, 36539180, -26475403,
    11583060, 3665288, -15452970, 21438190, -21091965, 15541156,
    -7026489, -1833676, 8760740, -12336099, 12221694, -9070106,
    4195220, 874032, -4822421, 6850612, -6792264, 5045834,
    -2370285, -377904, 2486201, -3545252, 3498009, -2585698,
    1224550, 140067, -1157941, 1646989, -1605220, 1170988,
    -553512, -40497, 462602, -648952, 616449, -436947,
    202298, 7266, -142890, 192128, -171618, 112996,
    -48321, -186, 24015, -26410,
];

pub static SRC_INT32_8_7_1361_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_7_1361_5000",
    input_stride: 6,
    output_stride: 7,
    subfilter_count: 8,
    subfilter_length: 16,
    block_in: 7,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_7_1361_5000_FIR),
};

static SRC_INT32_8_7_1361_5000_FIR: [i32; 128] = [
    -44331, 2658090, -6861203, -12573233, 67438301, -56012532,
    -189199324, 661682459, 1362160486, 513184333, -214847570, -20768131,
    59101481, -16713540, -4009425, 2242148, 41423, 2910629,
    -9967766, -6283765, 72130473, -93718638, -144049909, 808857386,
    1331587213, 368882192, -222737710, 10122677, 48312949, -18825299,
    -1581690, 1752697, 207746, 2898976, -13085455, 2104791,
    72056696, -131474148, -78520461, 948948623, 1271798272, 233779988,
    -215303715, 35336203, 36241355, -19160291, 326328, 1262398,
    467687, 2520963, -15903180, 12340459, 66273242, -166437430,
    7271606, 1076253219, 1185431187, 112133549, -195469826, 54122576,
    23950855, -18058119, 1685383, 823530, 823530, 1685383,
    -18058119, 23950855, 54122576, -195469826, 112133549, 1185431187,
    1076253219, 7271606, -166437430, 66273242, 12340459, -15903180,
    2520963, 467687, 1262398, 326328, -19160291, 36241355,
    35336203, -215303715, 233779988, 1271798272, 948948623, -78520461,
    -131474148, 72056696, 2104791, -13085455, 2898976, 207746,
    1752697, -1581690, -18825299, 48312949, 10122677, -222737710,
    368882192, 1331587213, 808857386, -144049909, -93718638, 72130473,
    -6283765, -9967766, 2910629, 41423, 2242148, -4009425,
    -16713540, 59101481, -20768131, -214847570, 513184333, 1362160486,
    661682459, -189199324, -56012532, 67438301, -12573233, -6861203,
    2658090, -44331,
];

pub static SRC_INT32_8_7_2468_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_7_2468_5000",
    input_stride: 6,
    output_stride: 7,
    subfilter_count: 8,
    subfilter_length: 20,
    block_in: 7,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_7_2468_5000_FIR),
};

static SRC_INT32_8_7_2468_5000_FIR: [i32; 160] = [
    -214219, 1313919, -1159305, -6988380, 27189266, -44451022,
    17859029, 96297011, -302776068, 570962532, 1597770795, 372929187,
    -280820580, 123149060, -9511937, -31447977, 25338060, -8870268,
    298675, 853689, -265171, 1773624, -2908580, -3907994,
    26586294, -55183454, 47652449, 56077177, -299279696, 775378789,
    1550513110, 190244286, -238926442, 136151338, -32440324, -17629343,
    21587422, -9599936, 1385843, 445447, -278890, 2162710,
    -4811413, 288479, 23138947, -62191889, 77314207, 4286463,
    -265980495, 976293610, 1458637595, 30422888, -183284256, 136018971,
    -49548240, -4320573, 16580146, -9325885, 2077760, 121967,
    -231899, 2398933, -6675654, 5373713, 16692568, -64174926,
    103931041, -55947621, -200121326, 1163522330, 1327240550, -100878600,
    -120264639, 124463132, -60139554, 7384775, 10973263, -8266435,
    2396553, -103018, -103018, 2396553, -8266435, 10973263,
    7384775, -60139554, 124463132, -120264639, -100878600, 1327240550,
    1163522330, -200121326, -55947621, 103931041, -64174926, 16692568,
    5373713, -6675654, 2398933, -231899, 121967, 2077760,
    -9325885, 16580146, -4320573, -49548240, 136018971, -183284256,
    30422888, 1458637595, 976293610, -265980495, 4286463, 77314207,
    -62191889, 23138947, 288479, -4811413, 2162710, -278890,
    445447, 1385843, -9599936, 21587422, -17629343, -32440324,
    136151338, -238926442, 190244286, 1550513110, 775378789, -299279696,
    56077177, 47652449, -55183454, 26586294, -3907994, -2908580,
    1773624, -265171, 853689, 298675, -8870268, 25338060,
    -31447977, -9511937, 123149060, -280820580, 372929187, 1597770795,
    570962532, -302776068, 96297011, 17859029, -44451022, 27189266,
    -6988380, -1159305, 1313919, -214219,
];

pub static SRC_INT32_8_7_2721_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_7_2721_5000",
    input_stride: 6,
    output_stride: 7,
    subfilter_count: 8,
    subfilter_length: 24,
    block_in: 7,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_7_2721_5000_FIR),
};

static SRC_INT32_8_7_2721_5000_FIR: [i32; 192] = [
    -112506, 971214, -2530071, 2126153, 5514693, -23216504,
    42705601, -40292449, -14557584, 138900323, -320410035, 543821484,
    1651563769, 334343365, -284707909, 159489596, -45453820, -19292493,
    34969067, -23746438, 8396591, 56123, -1736597, 828696,
    -87917, 1025483, -3226191, 4394774, 1528430, -20178640,
    47127478, -59880959, 21611280, 101688522, -329538168, 761951536,
    1600065042, 143374236, -229067342, 163581389, -68900131, 1063373,
    25021693, -22050503, 10067584, -1649430, -946543, 637153,
    -23063, 953826, -3712640, 6639628, -3313617, -14579823,
    47331345, -75892840, 60089499, 49299437, -306690144, 977763593,
    1500052560, -20945091, -160778340, 152695260, -83616287, 19005512,
    14041291, -18583790, 10553529, -2888934, -240362, 432275,
    87530, 726226, -3877732, 8598063, -8626074, -6634601,
    42735413, -86261240, 97328051, -15198332, -248218402, 1179881982,
    1357283980, -152647075, -87197521, 129471171, -89239564, 33181585,
    3160473, -13908536, 9991097, -3625028, 326779, 242599,
    242599, 326779, -3625028, 9991097, -13908536, 3160473,
    33181585, -89239564, 129471171, -87197521, -152647075, 1357283980,
    1179881982, -248218402, -15198332, 97328051, -86261240, 42735413,
    -6634601, -8626074, 8598063, -3877732, 726226, 87530,
    432275, -240362, -2888934, 10553529, -18583790, 14041291,
    19005512, -83616287, 152695260, -160778340, -20945091, 1500052560,
    977763593, -306690144, 49299437, 60089499, -75892840, 47331345,
    -14579823, -3313617, 6639628, -3712640, 953826, -23063,
    637153, -946543, -1649430, 10067584, -22050503, 25021693,
    1063373, -68900131, 163581389, -229067342, 143374236, 1600065042,
    761951536, -329538168, 101688522, 21611280, -59880959, 47127478,
    -20178640, 1528430, 4394774, -3226191, 1025483, -87917,
    828696, -1736597, 56123, 8396591, -23746438, 34969067,
    -19292493, -45453820, 159489596, -284707909, 334343365, 1651563769,
    543821484, -320410035, 138900323, -14557584, -40292449, 42705601,
    -23216504, 5514693, 2126153, -2530071, 971214, -112506,
];

pub static SRC_INT32_8_7_4082_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_7_4082_5000",
    input_stride: 6,
    output_stride: 7,
    subfilter_count: 8,
    subfilter_length: 56,
    block_in: 7,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_7_4082_5000_FIR),
};

static SRC_INT32_8_7_4082_5000_FIR: [i32; 448] = [
    -64462, 170161, -327556, 513615, -671518, 705690,
    -485420, -139940, 1312978, -3128820, 5588727, -8553972,
    11709304, -14545789, 16371469, -16354851, 13601136, -7254954,
    -3382832, 18742019, -38895171, 63519024, -91933308, 123260647,
    -156815542, 193117722, -237590395, 326736499, 1939988880, 70300960,
    -126058379, 135443546, -128892547, 114052919, -94735993, 73605297,
    -52732589, 33698068, -17590446, 5009276, 3899181, -9368631,
    11911002, -12201212, 10964680, -8881671, 6518201, -4287791,
    2443002, -1091338, 227425, 227494, -386876, 367056,
    -265665, 150969, -58150, 167568, -352429, 608262,
    -897416, 1138136, -1200350, 912364, -81512, -1470398,
    3859070, -7082667, 10968294, -15130414, 18951730, -21594983,
    22049815, -19212711, 11990537, 589905, -19292781, 44643091,
    -77018073, 116990961, -166294783, 230790700, -332935977, 615149129,
    1858330555, -139578791, -12775400, 66297607, -87167964, 91416634,
    -85742986, 74113325, -59386521, 43769562, -28935539, 16050330,
    -5794468, -1589934, 6222368, -8484804, 8913469, -8095833,
    6584908, -4838823, 3188604, -1832342, 850239, -232923,
    -84990, 193035, -179681, 116165, -40060, 139347,
    -330898, 630798, -1026538, 1461087, -1820940, 1933101,
    -1575582, 504457, 1502211, -4586691, 8746957, -13774907,
    19208877, -24311410, 28080276, -29295230, 26595100, -18569598,
    3836877, 18943282, -51215290, 95050784, -154693164, 241635695,
    -397615376, 917290658, 1701228514, -293083336, 89265744, -5179314,
    -37610617, 58902031, -66691866, 65468478, -58391697, 47952071,
    -36157188, 24564984, -14282681, 5978926, 74675, -3932875,
    5886089, -6362662, 5837303, -4756354, 3486428, -2288325,
    1313865, -620232, 194794, 16628, -83907, 73044,
    -10321, 85007, -259042, 568737, -1030077, 1619396,
    -2254703, 2782832, -2978070, 2557203, -1213893, -1327893,
    5245584, -10542889, 16978896, -24013639, 30781130, -36096619,
    38497417, -36305488, 27683444, -10627213, -17223108, 59244641,
    -121855802, 221505941, -418601104, 1212722226, 1480546430, -385759456,
    169678620, -70314846, 13273593, 21047462, -40454333, 49196884,
    -50246663, 46015987, -38564970, 29626572, -20577840, 12413728,
    -5747622, 844955, 2314411, -3955440, 4421611, -4095191,
    3333446, -2426090, 1575002, -893519, 420062, -139775,
    8052, 28833, 28833, 8052, -139775, 420062,
    -893519, 1575002, -2426090, 3333446, -4095191, 4421611,
    -3955440, 2314411, 844955, -5747622, 12413728, -20577840,
    29626572, -38564970, 46015987, -50246663, 49196884, -40454333,
    21047462, 13273593, -70314846, 169678620, -385759456, 1480546430,
    1212722226, -418601104, 221505941, -121855802, 59244641, -17223108,
    -10627213, 27683444, -36305488, 38497417, -36096619, 30781130,
    -24013639, 16978896, -10542889, 5245584, -1327893, -1213893,
    2557203, -2978070, 2782832, -2254703, 1619396, -1030077,
    568737, -259042, 85007, -10321, 73044, -83907,
    16628, 194794, -620232, 1313865, -2288325, 3486428,
    -4756354, 5837303, -6362662, 5886089, -3932875, 74675,
    5978926, -14282681, 24564984, -36157188, 47952071, -58391697,
    65468478, -66691866, 58902031, -37610617, -5179314, 89265744,
    -293083336, 1701228514, 917290658, -397615376, 241635695, -154693164,
    95050784, -51215290, 18943282, 3836877, -18569598, 26595100,
    -29295230, 28080276, -24311410, 19208877, -13774907, 8746957,
    -4586691, 1502211, 504457, -1575582, 1933101, -1820940,
    1461087, -1026538, 630798, -330898, 139347, -40060,
    116165, -179681, 193035, -84990, -232923, 850239,
    -1832342, 3188604, -4838823, 6584908, -8095833, 8913469,
    -8484804, 6222368, -1589934, -5794468, 16050330, -28935539,
    43769562, -59386521, 74113325, -85742986, 91416634, -87167964,
    66297607, -12775400, -139578791, 1858330555, 615149129, -332935977,
    230790700, -166294783, 116990961, -77018073, 44643091, -19292781,
    589905, 11990537, -19212711, 22049815, -21594983, 18951730,
    -15130414, 10968294, -7082667, 3859070, -1470398, -81512,
    912364, -1200350, 1138136, -897416, 608262, -352429,
    167568, -58150, 150969, -265665, 367056, -386876,
    227494, 227425, -1091338, 2443002, -4287791, 6518201,
    -8881671, 10964680, -12201212, 11911002, -9368631, 3899181,
    5009276, -17590446, 33698068, -52732589, 73605297, -94735993,
    114052919, -128892547, 135443546, -126058379, 70300960, 1939988880,
    326736499, -237590395, 193117722, -156815542, 123260647, -91933308,
    63519024, -38895171, 18742019, -3382832, -7254954, 13601136,
    -16354851, 16371469, -14545789, 11709304, -8553972, 5588727,
    -3128820, 1312978, -139940, -485420, 705690, -671518,
    513615, -327556, 170161, -64462,
];

pub static SRC_INT32_8_7_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_7_4535_5000",
    input_stride: 6,
    output_stride: 7,
    subfilter_count: 8,
    subfilter_length: 112,
    block_in: 7,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_7_4535_5000_FIR),
};

static SRC_INT32_8_7_4535_5000_FIR: [i32; 896] = [
    -29428, 51815, -81570, 118804, -162906, 212349,
    -264519, 315576, -360364, 392394, -403900, 385997,
    -328944, 222520, -56499, -178752, 491599, -888391,
    1372659, -1944309, 2598838, -3326613, 4112258, -4934198,
    5764388, -6568276, 7305017, -7927971, 8385491, -8621985,
    8579268, -8198132, 7420135, -6189516, 4455191, -2172741,
    -693692, 4169693, -8269150, 12993207, -18329715, 24253280,
    -30726046, 37699376, -45116667, 52917688, -61045120, 69454600,
    -78130915, 87116088, -96562980, 106850183, -118866955, 134873362,
    -162014207, 238303655, 2035675392, -26422188, -34546476, 54839596,
    -63831156, 67725998, -68682754, 67688991, -65294804, 61858767,
    -57645335, 52867636, -47707378, 42324231, -36860050, 31440531,
    -26175606, 21159302, -16469489, 12167738, -8299440, 4894241,
    -1966827, -481970, 2463766, -4000981, 5125016, -5874328,
    6292458, -6426111, 6323317, -6031757, 5597286, -5062689,
    4466696, -3843263, 3221121, -2623569, 2068512, -1568687,
    1132066, -762386, 459766, -221383, 42154, 84590,
    -166482, 211556, -227777, 222648, -202932, 174447,
    -141968, 109196, -78796, 52486, -22829, 43237,
    -72509, 111799, -161727, 222156, -291951, 368761,
    -448821, 526801, -595726, 646971, -670369, 654422,
    -586646, 454043, -243693, -56526, 457124, -966104,
    1588029, -2323065, 3166078, -4105788, 5124072, -6195419,
    7286614, -8356670, 9357038, -10232120, 10920086, -11353982,
    11463117, -11174669, 10415473, -9113892, 7201706, -4615875,
    1300070, 2794197, -7707034, 13470461, -20109859, 27647058,
    -36105790, 45520753, -55952481, 67512184, -80404989, 95009932,
    -112040346, 132900960, -160602282, 202618708, -283196779, 546530555,
    1941573985, -232008854, 82731739, -26085264, -3626416, 21445305,
    -32708025, 39810397, -44013601, 46069371, -46475427, 45592328,
    -43701239, 41033954, -37788922, 34139797, -30239898, 26224401,
    -22211305, 18301815, -14580510, 11115550, -7959047, 5147678,
    -2703578, 635498, 1059795, -2395921, 3395148, -4086582,
    4504334, -4685741, 4669685, -4495069, 4199480, -3818078,
    3382711, -2921287, 2457375, -2010035, 1593848, -1219130,
    892279, -616237, 391023, -214303, 81973, 11285,
    -71491, 104908, -117667, 115468, -103362, 85613,
    -65635, 45989, -11728, 27157, -51821, 87797,
    -136905, 200467, -279037, 372126, -477918, 593010,
    -712190, 828281, -932061, 1012292, -1055870, 1048113,
    -973194, 814718, -556454, 183186, 318316, -958244,
    1742659, -2672382, 3741941, -4938600, 6241540, -7621222,
    9038994, -10446965, 11788181, -12997104, 14000407, -14718049,
    15064599, -14950747, 14284898, -12974761, 10928751, -8057032,
    4271938, 512576, -6382953, 13430251, -21757755, 31493986,
    -42814690, 55980643, -71405189, 89781985, -112346404, 141469322,
    -182213352, 247357311, -380274338, 877444497, 1761209039, -369219726,
    176351124, -97285189, 53436807, -25423013, 6154619, 7583461,
    -17474196, 24500772, -29293649, 32292339, -33827043, 34162159,
    -33520251, 32095406, -30060594, 27571540, -24768575, 21777341,
    -18708905, 15659638, -12711084, 9929979, -7368482, 5064688,
    -3043405, 1317200, 112326, -1253093, 2120957, -2738076,
    3131252, -3330339, 3366740, -3272050, 3076884, -2809896,
    2497022, -2160929, 1820691, -1491651, 1185463, -910286,
    671093, -470071, 307084, -180151, 85931, -20189,
    -21792, 44847, -53633, 52400, -44839, 33989,
    2741, 5191, -21485, 48907, -90275, 148247,
    -225053, 322198, -440130, 577899, -732828, 900209,
    -1073055, 1241931, -1394888, 1517522, -1593184, 1603339,
    -1528108, 1346966, -1039611, 586977, 27630, -817310,
    1790295, -2948679, 4287194, -5792095, 7440201, -9198145,
    11021871, -12856417, 14636006, -16284434, 17715756, -18835208,
    19540317, -19722072, 19266020, -18053070, 15959732, -12857361,
    8609826, -3068657, -3935800, 12609797, -23222738, 36153710,
    -51976027, 71619774, -96709793, 130347369, -179206295, 260532372,
    -436011571, 1206867735, 1509478322, -435747459, 237068085, -150190406,
    99956218, -66557786, 42534094, -24458029, 10534341, 275314,
    -8624017, 14955597, -19594849, 22796420, -24772266, 25707294,
    -25768194, 25108199, -23869397, 22183545, -20172038, 17945427,
    -15602773, 13231039, -10904624, 8685142, -6621477, 4750132,
    -3095859, 1672560, -484392, -472948, 1210827, -1746218,
    2100246, -2296774, 2361095, -2318743, 2194483, -2011468,
    1790594, -1550053, 1305058, -1067754, 847267, -649886,
    479340, -337147, 223004, -135193, 70987, -27021,
    -371, 14875, -19966, 18748, 18748, -19966,
    14875, -371, -27021, 70987, -135193, 223004,
    -337147, 479340, -649886, 847267, -1067754, 1305058,
    -1550053, 1790594, -2011468, 2194483, -2318743, 2361095,
    -2296774, 2100246, -1746218, 1210827, -472948, -484392,
    1672560, -3095859, 4750132, -6621477, 8685142, -10904624,
    13231039, -15602773, 17945427, -20172038, 22183545, -23869397,
    25108199, -25768194, 25707294, -24772266, 22796420, -19594849,
    14955597, -8624017, 275314, 10534341, -24458029, 42534094,
    -66557786, 99956218, -150190406, 237068085, -435747459, 1509478322,
    1206867735, -436011571, 260532372, -179206295, 130347369, -96709793,
    71619774, -51976027, 36153710, -23222738, 12609797, -3935800,
    -3068657, 8609826, -12857361, 15959732, -18053070, 19266020,
    -19722072, 19540317, -18835208, 17715756, -16284434, 14636006,
    -12856417, 11021871, -9198145, 7440201, -5792095, 4287194,
    -2948679, 1790295, -817310, 27630, 586977, -1039611,
    1346966, -1528108, 1603339, -1593184, 1517522, -1394888,
    1241931, -1073055, 900209, -732828, 577899, -440130,
    322198, -225053, 148247, -90275, 48907, -21485,
    5191, 2741, 33989, -44839, 52400, -53633,
    44847, -21792, -20189, 85931, -180151, 307084,
    -470071, 671093, -910286, 1185463, -1491651, 1820691,
    -2160929, 2497022, -2809896, 3076884, -3272050, 3366740,
    -3330339, 3131252, -2738076, 2120957, -1253093, 112326,
    1317200, -3043405, 5064688, -7368482, 9929979, -12711084,
    15659638, -18708905, 21777341, -24768575, 27571540, -30060594,
    32095406, -33520251, 34162159, -33827043, 32292339, -29293649,
    24500772, -17474196, 7583461, 6154619, -25423013, 53436807,
    -97285189, 176351124, -369219726, 1761209039, 877444497, -380274338,
    247357311, -182213352, 141469322, -112346404, 89781985, -71405189,
    55980643, -42814690, 31493986, -21757755, 13430251, -6382953,
    512576, 4271938, -8057032, 10928751, -12974761, 14284898,
    -14950747, 15064599, -14718049, 14000407, -12997104, 11788181,
    -10446965, 9038994, -7621222, 6241540, -4938600, 3741941,
    -2672382, 1742659, -958244, 318316, 183186, -556454,
    814718, -973194, 1048113, -1055870, 1012292, -932061,
    828281, -712190, 593010, -477918, 372126, -279037,
    200467, -136905, 87797, -51821, 27157, -11728,
    45989, -65635, 85613, -103362, 115468, -117667,
    104908, -71491, 11285, 81973, -214303, 391023,
    -616237, 892279, -1219130, 1593848, -2010035, 2457375,
    -2921287, 3382711, -3818078, 4199480, -4495069, 4669685,
    -4685741, 4504334, -4086582, 3395148, -2395921, 1059795,
    635498, -2703578, 5147678, -7959047, 11115550, -14580510,
    18301815, -22211305, 26224401, -30239898, 34139797, -37788922,
    41033954, -43701239, 45592328, -46475427, 46069371, -44013601,
    39810397, -32708025, 21445305, -3626416, -26085264, 82731739,
    -232008854, 1941573985, 546530555, -283196779, 202618708, -160602282,
    132900960, -112040346, 95009932, -80404989, 67512184, -55952481,
    45520753, -36105790, 27647058, -20109859, 13470461, -7707034,
    2794197, 1300070, -4615875, 7201706, -9113892, 10415473,
    -11174669, 11463117, -11353982, 10920086, -10232120, 9357038,
    -8356670, 7286614, -6195419, 5124072, -4105788, 3166078,
    -2323065, 1588029, -966104, 457124, -56526, -243693,
    454043, -586646, 654422, -670369, 646971, -595726,
    526801, -448821, 368761, -291951, 222156, -161727,
    111799, -72509, 43237, -22829, 52486, -78796,
    109196, -141968, 174447, -202932, 222648, -227777,
    211556, -166482, 84590, 42154, -221383, 459766,
    -762386, 1132066, -1568687, 2068512, -2623569, 3221121,
    -3843263, 4466696, -5062689, 5597286, -6031757, 6323317,
    -6426111, 6292458, -5874328, 5125016, -4000981, 2463766,
    -481970, -1966827, 4894241, -8299440, 12167738, -16469489,
    21159302, -26175606, 31440531, -36860050, 42324231, -47707378,
    52867636, -57645335, 61858767, -65294804, 67688991, -68682754,
    67725998, -63831156, 54839596, -34546476, -26422188, 2035675392,
    238303655, -162014207, 134873362, -118866955, 106850183, -96562980,
    87116088, -78130915, 69454600, -61045120, 52917688, -45116667,
    37699376, -30726046, 24253280, -18329715, 12993207, -8269150,
    4169693, -693692, -2172741, 4455191, -6189516, 7420135,
    -8198132, 8579268, -8621985, 8385491, -7927971, 7305017,
    -6568276, 5764388, -4934198, 4112258, -3326613, 2598838,
    -1944309, 1372659, -888391, 491599, -178752, -56499,
    222520, -328944, 385997, -403900, 392394, -360364,
    315576, -264519, 212349, -162906, 118804, -81570,
    51815, -29428,
];

pub static SRC_INT32_8_21_2160_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_21_2160_5000",
    input_stride: 13,
    output_stride: 5,
    subfilter_count: 8,
    subfilter_length: 48,
    block_in: 21,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_21_2160_5000_FIR),
};

static SRC_INT32_8_21_2160_5000_FIR: [i32; 384] = [
    82223, 164022, -24210, -677793, -1406990, -1118387,
    1118034, 4548629, 6097677, 2183494, -7394807, -16661120,
    -15687659, 1465502, 28155568, 44322079, 28264953, -23924355,
    -85281031, -104894263, -36212396, 128744790, 343080963, 521818358,
    585457181, 504471851, 316337962, 103959999, -50419177, -106561936,
    -78744974, -16039788, 32441638, 43707968, 24895335, -1485815,
    -16665949, -15856969, -6032054, 3033296, 6144344, 4141706,
    734129, -1251883, -1344958, -576057, 24373, 161784,
    96276, 161997, -80878, -781809, -1453061, -952155,
    1524052, 4927247, 5961161, 1236324, -8758907, -17300395,
    -14439012, 4585485, 31255073, 44408819, 23480349, -31987029,
    -91160543, -101794235, -20424669, 154355112, 369260959, 537297181,
    583104189, 485388272, 289217973, 80140842, -63015013, -106870395,
    -71665531, -8415254, 35994694, 42603479, 21523464, -4241785,
    -17378120, -14908757, -4688230, 3781460, 6107381, 3714441,
    375901, -1353779, -1269632, -478083, 65002, 155976,
    110306, 155021, -145604, -886404, -1480510, -752495,
    1947937, 5269363, 5729441, 197785, -10105533, -17754891,
    -12919183, 7843594, 34143974, 43935788, 18111971, -40139042,
    -96271107, -97198913, -3100890, 180640333, 394693211, 550791145,
    578416312, 464710431, 261906618, 57415843, -73984671, -105901923,
    -64155440, -1125279, 38916604, 41049522, 18087697, -6779714,
    -17831566, -13837888, -3379515, 4425398, 5993716, 3274470,
    46235, -1425601, -1183634, -385127, 97945, 147283,
    123845, 142428, -218183, -989670, -1486728, -519212,
    2384775, 5566666, 5398163, -924355, -11414811, -18005964,
    -11130967, 11205615, 36772219, 42875843, 12192552, -48285450,
    -100502285, -91056535, 15699170, 207440471, 419195936, 562197637,
    571429588, 442591973, 234587475, 35901033, -83327403, -103746830,
    -56325892, 5763473, 41207716, 39090222, 14633905, -9080964,
    -18036562, -12666029, -2120554, 4964124, 5810842, 2829007,
    -252656, -1469207, -1089505, -298224, 123591, 136364,
    136364, 123591, -298224, -1089505, -1469207, -252656,
    2829007, 5810842, 4964124, -2120554, -12666029, -18036562,
    -9080964, 14633905, 39090222, 41207716, 5763473, -56325892,
    -103746830, -83327403, 35901033, 234587475, 442591973, 571429588,
    562197637, 419195936, 207440471, 15699170, -91056535, -100502285,
    -48285450, 12192552, 42875843, 36772219, 11205615, -11130967,
    -18005964, -11414811, -924355, 5398163, 5566666, 2384775,
    -519212, -1486728, -989670, -218183, 142428, 123845,
    147283, 97945, -385127, -1183634, -1425601, 46235,
    3274470, 5993716, 4425398, -3379515, -13837888, -17831566,
    -6779714, 18087697, 41049522, 38916604, -1125279, -64155440,
    -105901923, -73984671, 57415843, 261906618, 464710431, 578416312,
    550791145, 394693211, 180640333, -3100890, -97198913, -96271107,
    -40139042, 18111971, 43935788, 34143974, 7843594, -12919183,
    -17754891, -10105533, 197785, 5729441, 5269363, 1947937,
    -752495, -1480510, -886404, -145604, 155021, 110306,
    155976, 65002, -478083, -1269632, -1353779, 375901,
    3714441, 6107381, 3781460, -4688230, -14908757, -17378120,
    -4241785, 21523464, 42603479, 35994694, -8415254, -71665531,
    -106870395, -63015013, 80140842, 289217973, 485388272, 583104189,
    537297181, 369260959, 154355112, -20424669, -101794235, -91160543,
    -31987029, 23480349, 44408819, 31255073, 4585485, -14439012,
    -17300395, -8758907, 1236324, 5961161, 4927247, 1524052,
    -952155, -1453061, -781809, -80878, 161997, 96276,
    161784, 24373, -576057, -1344958, -1251883, 734129,
    4141706, 6144344, 3033296, -6032054, -15856969, -16665949,
    -1485815, 24895335, 43707968, 32441638, -16039788, -78744974,
    -106561936, -50419177, 103959999, 316337962, 504471851, 585457181,
    521818358, 343080963, 128744790, -36212396, -104894263, -85281031,
    -23924355, 28264953, 44322079, 28155568, 1465502, -15687659,
    -16661120, -7394807, 2183494, 6097677, 4548629, 1118034,
    -1118387, -1406990, -677793, -24210, 164022, 82223,
];

pub static SRC_INT32_8_21_3239_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_21_3239_5000",
    input_stride: 13,
    output_stride: 5,
    subfilter_count: 8,
    subfilter_length: 76,
    block_in: 21,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_21_3239_5000_FIR),
};

static SRC_INT32_8_21_3239_5000_FIR: [i32; 608] = [
    -14535, -97061, -134109, 29526, 363321, 510227,
    61202, -861264, -1364705, -478938, 1585784, 2977194,
    1604448, -2386095, -5629095, -3996517, 2884813, 9527719,
    8391807, -2398912, -14727091, -15715082, -154487, 21075420,
    27190607, 6461162, -28226532, -44821470, -19473370, 35773867,
    73229565, 46082798, -43720830, -128511917, -112642138, 55239080,
    329491425, 580747299, 673590277, 555717022, 293354301, 26488521,
    -122706376, -121571429, -30853065, 53607761, 71417528, 28664773,
    -24945419, -44817037, -24162394, 10338994, 27856463, 18819777,
    -2786974, -16532746, -13560810, -711523, 9117546, 8990067,
    1877510, -4537917, -5423488, -1834768, 1955196, 2923251,
    1314698, -675619, -1364191, -745019, 153731, 518735,
    321900, -4049, -137929, -85907, -22525, -107612,
    -126901, 66262, 401960, 491667, -39900, -971193,
    -1341858, -261353, 1846900, 2984811, 1207979, -2927178,
    -5753277, -3364410, 3891871, 9935967, 7500502, -4117951,
    -15705670, -14615347, 2581934, 23082787, 26069650, 2336197,
    -31997766, -44119164, -13481203, 42606366, 73963876, 37483862,
    -56553127, -133819251, -100065659, 85771620, 365279343, 603185464,
    670130352, 528325534, 257173644, -295434, -130289997, -113184113,
    -18136454, 59995560, 68598485, 21396014, -29834468, -44131719,
    -19877590, 13919515, 28073456, 16359454, -5278936, -17066378,
    -12232077, 919345, 9673208, 8336844, 885715, -4984231,
    -5143539, -1282431, 2256995, 2826354, 1038590, -849447,
    -1341817, -624834, 236733, 517836, 278686, -34126,
    -138643, -74477, -31511, -117208, -116074, 105724,
    436800, 462556, -148389, -1072380, -1294472, -25306,
    2092982, 2943340, 769967, -3448487, -5789966, -2647688,
    4882224, 10202504, 6451034, -5842240, -16473327, -13240112,
    5382642, 24800609, 24494338, -1979976, -35405782, -42694301,
    -7042231, 49044948, 73563022, 27892739, -69154835, -137318761,
    -84972021, 117878074, 400410345, 622823377, 663243142, 498823890,
    221249820, -24953174, -135450285, -103545356, -5747067, 65201745,
    64854949, 14082447, -34088626, -42800676, -15445127, 17158857,
    27854475, 13739621, -7597289, -17318496, -10767705, 2470679,
    10057134, 7583125, -75743, -5332788, -4797191, -737885,
    2507576, 2690397, 762213, -998969, -1299359, -502996,
    309492, 508294, 234619, -60466, -136572, -63072,
    -41375, -125483, -101450, 147373, 466811, 422558,
    -262854, -1162389, -1221732, 226288, 2318931, 2850711,
    295517, -3940343, -5734267, -1854133, 5838952, 10316814,
    5253694, -7544222, -17009334, -11600634, 8205461, 26190687,
    22472644, -6426358, -38383357, -40541717, -239470, 54973641,
    71984210, 17409417, -81324554, -138849939, -67383771, 151328799,
    434577994, 639478014, 652993553, 467480473, 185874735, -47351346,
    -138268832, -92856973, 6151429, 69200484, 60279609, 6835270,
    -37667364, -40867517, -10937650, 20019908, 27218617, 11006266,
    -9712848, -17295884, -9195587, 3921618, 10270425, 6744934,
    -993161, -5582593, -4393076, -209376, 2705615, 2519703,
    490057, -1123224, -1238821, -381666, 371521, 490973,
    190580, -82925, -132063, -51960, -51960, -132063,
    -82925, 190580, 490973, 371521, -381666, -1238821,
    -1123224, 490057, 2519703, 2705615, -209376, -4393076,
    -5582593, -993161, 6744934, 10270425, 3921618, -9195587,
    -17295884, -9712848, 11006266, 27218617, 20019908, -10937650,
    -40867517, -37667364, 6835270, 60279609, 69200484, 6151429,
    -92856973, -138268832, -47351346, 185874735, 467480473, 652993553,
    639478014, 434577994, 151328799, -67383771, -138849939, -81324554,
    17409417, 71984210, 54973641, -239470, -40541717, -38383357,
    -6426358, 22472644, 26190687, 8205461, -11600634, -17009334,
    -7544222, 5253694, 10316814, 5838952, -1854133, -5734267,
    -3940343, 295517, 2850711, 2318931, 226288, -1221732,
    -1162389, -262854, 422558, 466811, 147373, -101450,
    -125483, -41375, -63072, -136572, -60466, 234619,
    508294, 309492, -502996, -1299359, -998969, 762213,
    2690397, 2507576, -737885, -4797191, -5332788, -75743,
    7583125, 10057134, 2470679, -10767705, -17318496, -7597289,
    13739621, 27854475, 17158857, -15445127, -42800676, -34088626,
    14082447, 64854949, 65201745, -5747067, -103545356, -135450285,
    -24953174, 221249820, 498823890, 663243142, 622823377, 400410345,
    117878074, -84972021, -137318761, -69154835, 27892739, 73563022,
    49044948, -7042231, -42694301, -35405782, -1979976, 24494338,
    24800609, 5382642, -13240112, -16473327, -5842240, 6451034,
    10202504, 4882224, -2647688, -5789966, -3448487, 769967,
    2943340, 2092982, -25306, -1294472, -1072380, -148389,
    462556, 436800, 105724, -116074, -117208, -31511,
    -74477, -138643, -34126, 278686, 517836, 236733,
    -624834, -1341817, -849447, 1038590, 2826354, 2256995,
    -1282431, -5143539, -4984231, 885715, 8336844, 9673208,
    919345, -12232077, -17066378, -5278936, 16359454, 28073456,
    13919515, -19877590, -44131719, -29834468, 21396014, 68598485,
    59995560, -18136454, -113184113, -130289997, -295434, 257173644,
    528325534, 670130352, 603185464, 365279343, 85771620, -100065659,
    -133819251, -56553127, 37483862, 73963876, 42606366, -13481203,
    -44119164, -31997766, 2336197, 26069650, 23082787, 2581934,
    -14615347, -15705670, -4117951, 7500502, 9935967, 3891871,
    -3364410, -5753277, -2927178, 1207979, 2984811, 1846900,
    -261353, -1341858, -971193, -39900, 491667, 401960,
    66262, -126901, -107612, -22525, -85907, -137929,
    -4049, 321900, 518735, 153731, -745019, -1364191,
    -675619, 1314698, 2923251, 1955196, -1834768, -5423488,
    -4537917, 1877510, 8990067, 9117546, -711523, -13560810,
    -16532746, -2786974, 18819777, 27856463, 10338994, -24162394,
    -44817037, -24945419, 28664773, 71417528, 53607761, -30853065,
    -121571429, -122706376, 26488521, 293354301, 555717022, 673590277,
    580747299, 329491425, 55239080, -112642138, -128511917, -43720830,
    46082798, 73229565, 35773867, -19473370, -44821470, -28226532,
    6461162, 27190607, 21075420, -154487, -15715082, -14727091,
    -2398912, 8391807, 9527719, 2884813, -3996517, -5629095,
    -2386095, 1604448, 2977194, 1585784, -478938, -1364705,
    -861264, 61202, 510227, 363321, 29526, -134109,
    -97061, -14535,
];

pub static SRC_INT32_8_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_8_21_4535_5000",
    input_stride: 13,
    output_stride: 5,
    subfilter_count: 8,
    subfilter_length: 284,
    block_in: 21,
    block_out: 8,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_8_21_4535_5000_FIR),
};

static SRC_INT32_8_21_4535_5000_FIR: [i32; 2272] = [
    -12837, -9223, 9916, 23221, 8851, -23379,
    -34515, -1940, 43433, 43586, -14667, -69064,
    -45953, 43523, 97245, 36166, -85702, -122641,
    -8542, 139876, 137672, -41759, -201507, -133050,
    117408, 262350, 98832, -217484, -310450, -25981,
    336194, 330804, -91671, -461979, -306774, 255286,
    577301, 222255, -458994, -659330, -64455, 688335,
    681691, -172963, -919560, -617298, 486765, 1120125,
    442149, -861530, -1250621, -139763, 1268047, 1268249,
    -294190, -1663208, -1131721, 847692, 1991797, 807275,
    -1489276, -2190366, -275252, 2166698, 2193189, -463504,
    -2807968, -1939976, 1382288, 3325109, 1384767, -2425095,
    -3620773, -505142, 3505944, 3597495, -689280, -4511576,
    -3168992, 2150195, 5307860, 2272615, -3786913, -5749866,
    -881760, 5466534, 5695111, -983118, -7018595, -5019098,
    3246246, 8244404, 3631882, -5772266, -8930736, -1494150,
    8366852, 8867084, -1368772, -10782666, -7865162, 4856479,
    12730462, 5778975, -8787734, -13894472, -2523569, 12899983,
    13950419, -1909486, -16853769, -12583647, 7441586, 20240509,
    9503794, -13902838, -22590139, -4450840, 21034643, 23371898,
    -2815829, -28498650, -21974831, 12561196, 35890050, 17638152,
    -25187621, -42750078, -9254256, 41517786, 48564206, -5196636,
    -63588934, -52701011, 30542718, 97480204, 54074059, -83278871,
    -168975131, -48552228, 282755747, 639434995, 779386163, 602368627,
    234775449, -77068565, -167267118, -65155388, 66437718, 93897540,
    18634871, -58977800, -58930404, 3476247, 51408980, 36451076,
    -15609891, -43364512, -20169193, 22111251, 35002545, 7912621,
    -24856648, -26633006, 1240873, 24912257, 18601395, -7776540,
    -23030458, -11232763, 12031806, 19821208, 4797910, -14310317,
    -15810904, 507528, 14924820, 11457498, -4573838, -14206804,
    -7148645, 7378997, 12499528, 3194938, -8982600, -10143122,
    175803, 9513368, 7457082, -2820274, -9152040, -4723672,
    4676326, 8111646, 2174608, -5754509, -6617226, 17549,
    6125347, 4886892, -1742667, -5903685, -3115815, 2951055,
    5231668, 1464270, -3646879, -4261976, -50352, 3878063,
    3142746, -1052547, -3724002, -2005327, 1813907, 3282503,
    955590, -2240658, -2657268, -69090, 2369239, 1947042,
    -610055, -2256264, -1237186, 1067042, 1968959, 594140,
    -1311788, -1576355, -62815, 1372730, 1142007, -333314,
    -1289960, -718722, 589920, 1108535, 345485, -717984,
    -872639, -46495, 739127, 621079, -167981, -680783,
    -384346, 299410, 571783, 183261, -357960, -438783,
    -29029, 359163, 303763, -75602, -320735, -182672,
    134447, 259897, 85126, -155668, -191414, -14960,
    149562, 126439, -28633, -126647, -72113, 49657,
    96226, 31803, -53830, -65493, -5779, 47273,
    39175, -7861, -35508, -19629, 12221, 22829,
    7251, -10734, -13404, -7433, 12493, 23133,
    5156, -26779, -32757, 4226, 46918, 38870,
    -23517, -71297, -36897, 54656, 96268, 21579,
    -97849, -115994, 12198, 150724, 122668, -68279,
    -207650, -107212, 147923, 259438, 60480, -248480,
    -293572, 25092, 362288, 295127, -153524, -476068,
    -248409, 323263, 571039, 139284, -525398, -623994,
    41995, 742479, 609394, -297753, -948292, -502493,
    620068, 1108898, 283259, -988626, -1185106, 59241,
    1369757, 1136410, -522522, -1717089, -926193, 1087043,
    1974118, 527798, -1713916, -2078827, 69157, 2344577,
    1970194, -852978, -2902919, -1596188, 1785488, 3300151,
    922558, -2799844, -3442352, 58499, 3801317, 3240367,
    -1320856, -4671529, -2621322, 2799258, 5276308, 1540760,
    -4387429, -5476938, 5867, 5940259, 5144149, -1973683,
    -7280503, -4173797, 4262157, 8209977, 2502887, -6713249,
    -8524731, -124389, 9114632, 8033190, -2900708, -11208222,
    -6575825, 6435443, 12703558, 4044617, -10263966, -13294950,
    -400437, 14093917, 12680541, -4313382, -17563423, -10580684,
    9962707, 20250715, 6752096, -16320196, -21682418, -992837,
    23068490, 21333079, -6869683, -29806898, -18601308, 17022440,
    36056105, 12729952, -29776336, -41247367, -2585375, 45836669,
    44657755, -13971986, -67060666, -45153852, 42209416, 99177941,
    40048400, -100615006, -167247323, -16461746, 331218344, 672910499,
    774104634, 562152177, 187786848, -101835879, -162363301, -46620900,
    76972278, 88566600, 6726179, -63896542, -53207555, 11876922,
    53158475, 30752752, -21531159, -43094247, -14828947, 26066490,
    33422543, 3172950, -27195775, -24255186, 5218671, 25929546,
    15822817, -10904479, -23000076, -8366811, 14287661, 19005880,
    2086431, -15728824, -14459478, 2888677, 15587144, 9798200,
    -6510540, -14228554, -5381488, 8813670, 12017997, 1485249,
    -9907233, -9304634, 1701643, 9960803, 6405315, -4076351,
    -9185970, -3589740, 5615909, 7816026, 1069481, -6366223,
    -6085893, 1007962, 6427344, 4214121, -2559693, -5936475,
    -2388433, 3562885, 5050373, 755749, -4046026, -3928715,
    582915, 4077194, 2719797, -1572808, -3750757, -1549528,
    2201649, 3173939, 514296, -2492628, -2454499, 322224,
    2495320, 1690539, -928584, -2275727, -963081, 1302078,
    1906561, 331698, -1463067, -1458704, 166878, 1448089,
    994508, -517565, -1302676, -563306, 723732, 1074680,
    199200, -802711, -808741, 79064, 780760, 542269,
    -266530, -688133, -303094, 369278, 554788, 108713,
    -401049, -407105, 33119, 379758, 265767, -122789,
    -324341, -144822, 166656, 252233, 51770, -174673,
    -177658, 11569, 158163, 110743, -47682, -127994,
    -57393, 61805, 93284, 19749, -60398, -60695,
    2964, 49886, 34258, -13424, -35743, -15617,
    15207, 21985, 4558, -11947, -13707, -5391,
    14922, 22546, 1201, -29740, -30244, 10514,
    49533, 33192, -32142, -72106, -26818, 64952,
    93264, 6173, -108266, -106782, 33171, 158698,
    104791, -93964, -209632, -78622, 176006, 251113,
    20131, -274946, -270326, 76590, 381394, 252739,
    -213299, -480603, -183947, 385723, 552934, 52112,
    -582060, -575283, 149224, 782198, 523501, -418277,
    -957980, -375723, 742543, 1074766, 116358, -1097185,
    -1094405, 259687, 1444731, 979559, -743089, -1736471,
    -699098, 1307110, 1915783, 234099, -1906172, -1923385,
    416229, 2476542, 1704277, -1229476, -2939539, -1215846,
    2156672, 3207390, 436378, -3121412, -3191575, 627015,
    4022097, 2813171, -1932080, -4737625, -2014345, 3397801,
    5136547, 769910, -4904362, -5089274, 902333, 6297315,
    4482516, -2933794, -7396205, -3234793, 5201024, 8007412,
    1311582, -7526325, -7940496, 1261448, 9683538, 7026865,
    -4388576, -11408962, -5139215, 7898742, 12416762, 2209989,
    -11545518, -12417526, 1752947, 15012308, 11137990, -6654920,
    -17921751, -8339292, 12308413, 19846953, 3830309, -18432476,
    -20320164, 2528504, 24656317, 18830887, -10837891, -30523247,
    -14797801, 21202484, 35485959, 7479600, -33834302, -38870728,
    4266964, 49304214, 39745342, -22673957, -69243634, -36451717,
    53391725, 98885651, 24566190, -116783259, -161885786, 18973148,
    379636837, 702394394, 763606072, 519260147, 142275517, -122735444,
    -154541017, -28041695, 85550522, 81652105, -4950377, -67398195,
    -46560532, 19844896, 53801395, 24549209, -26907830, -41960401,
    -9279385, 29432778, 31192410, -1561169, -28952834, -21420072,
    9038477, 26409988, 12759252, -13773977, -22505213, -5365112,
    16228927, 17815433, -637338, -16813860, -12830103, 5186220,
    15927269, 7957875, -8295685, -13962237, -3523294, 10055639,
    11298110, -237526, -10622263, -8286128, 3178060, 10202286,
    5234224, -5237650, -9033670, -2394253, 6432641, 7365125,
    -46440, -6843077, -5436635, 1968174, 6596263, 3462768,
    -3316737, -5848790, -1620060, 4096396, 4768717, 39207,
    -4359167, -3519409, 1197760, 4191713, 2246292, -2055678,
    -3701318, -1067318, 2540595, 3002343, 67502, -2691330,
    -2204357, 702547, 2569454, 1402814, -1224581, -2248911,
    -672773, 1507922, 1806350, 65790, -1582852, -1313027,
    390259, 1493176, 828817, -688908, -1288866, -398600,
    841066, 1019554, 50945, -869991, -729406, 201185,
    805980, 453677, -358182, -681448, -216989, 430561,
    526845, 33193, -435304, -367730, 93521, 392308,
    223074, -166632, -321317, -104758, 194872, 239617,
    18036, -189752, -160596, 37293, 163374, 93160,
    -65326, -126717, -41869, 72396, 88526, 7616,
    -65561, -54802, 11388, 51405, 28802, -18525,
    -35241, -11436, 17763, 20725, 1894, -12852,
    -13725, -3128, 17141, 21452, -2938, -32183,
    -27003, 16796, 51193, 26641, -40353, -71434,
    -15899, 74173, 88241, -9752, -116692, -95135,
    53946, 163569, 84349, -118263, -207323, -47814,
    201025, 237441, -21419, -296248, -241072, 127459,
    392989, 204394, -269727, -475326, -114612, 441288,
    523164, -37535, -627659, -513993, 255040, 806456,
    425573, -531992, -948146, -239421, 851519, 1018108,
    -55236, -1184726, -980041, 457480, 1491077, 800590,
    -951267, -1720520, -454822, 1503141, 1817489, -67976,
    -2061713, -1726703, 758886, 2559354, 1400385, -1585139,
    -2916415, -806326, 2487880, 3047970, -64087, -3382636,
    -2872789, 1188824, 4162968, 2323906, -2510232, -4707528,
    -1359861, 3933059, 4890324, -24568, -5326289, -4593639,
    1789398, 6529230, 3722631, -3843519, -7361883, -2220351,
    6042890, 7639189, 81698, -8193616, -7188214, 2635201,
    10060177, 5866965, -5801539, -11378547, -3583211, 9215320,
    11873312, 311553, -12604221, -11277260, 3892909, 15633503,
    9351380, -8885604, -17917607, -5902611, 14428826, 19032739,
    796118, -20192916, -18525666, 6042071, 25759997, 15910303,
    -14638281, -30624756, -10635672, 25011758, 34179589, 1988519,
    -37269494, -35652471, 11166745, 51831947, 33904163, -31123939,
    -70058906, -26736237, 63848022, 96532805, 7868990, -131404989,
    -152738943, 57470035, 427474966, 727531740, 748018526, 474193985,
    98696816, -139705126, -144109652, -9768438, 92085933, 73342953,
    -16173270, -69452721, -39144022, 27231835, 53348501, 17974335,
    -31642539, -40000912, -3635303, 32151923, 28366876, -6194616,
    -30100676, -18190980, 12625423, 26350777, 9476025, -16330296,
    -21561372, -2289826, 17820000, 16278108, -3318245, -17547122,
    -10958679, 7354607, 15941686, 5975599, -9894733, -13416165,
    -1612557, 11081716, 10356803, -1938409, -11115295, -7109981,
    4575669, 10234949, 3968675, -6281597, -8700044, -1162008,
    7111195, 6769589, -1150460, -7176745, -4683756, 2879047,
    6630004, 2648827, -3999074, -5643617, -826667, 4541581,
    4393427, -670765, -4580848, -3043135, 1781926, 4220195,
    1732357, -2491782, -3577509, -568747, 2824417, 2771885,
    -375683, -2833339, -1912442, 1064305, 2590739, 1090054,
    -1492317, -2176908, -372337, 1680759, 1670818, -198157,
    -1669112, -1142626, 602886, 1507469, 648527, -844042,
    -1249166, -228066, 939773, 944568, -96251, -918710,
    -636463, 317444, 814520, 357243, -441186, -661081,
    -127852, 482153, 488699, -41752, -460179, -321587,
    150984, 396700, 176635, -206303, -311849, -63335,
    218598, 222401, -15383, -200681, -140642, 61709,
    165163, 74087, -81238, -122903, -25876, 81254,
    82098, -4346, -69251, -47966, 19330, 51832,
    22936, -23077, -34037, -7179, 19853, 19094,
    -684, -13443, -13443, -684, 19094, 19853,
    -7179, -34037, -23077, 22936, 51832, 19330,
    -47966, -69251, -4346, 82098, 81254, -25876,
    -122903, -81238, 74087, 165163, 61709, -140642,
    -200681, -15383, 222401, 218598, -63335, -311849,
    -206303, 176635, 396700, 150984, -321587, -460179,
    -41752, 488699, 482153, -127852, -661081, -441186,
    357243, 814520, 317444, -636463, -918710, -96251,
    944568, 939773, -228066, -1249166, -844042, 648527,
    1507469, 602886, -1142626, -1669112, -198157, 1670818,
    1680759, -372337, -2176908, -1492317, 1090054, 2590739,
    1064305, -1912442, -2833339, -375683, 2771885, 2824417,
    -568747, -3577509, -2491782, 1732357, 4220195, 1781926,
    -3043135, -4580848, -670765, 4393427, 4541581, -826667,
    -5643617, -3999074, 2648827, 6630004, 2879047, -4683756,
    -7176745, -1150460, 6769589, 7111195, -1162008, -8700044,
    -6281597, 3968675, 10234949, 4575669, -7109981, -11115295,
    -1938409, 10356803, 11081716, -1612557, -13416165, -9894733,
    5975599, 15941686, 7354607, -10958679, -17547122, -3318245,
    16278108, 17820000, -2289826, -21561372, -16330296, 9476025,
    26350777, 12625423, -18190980, -30100676, -6194616, 28366876,
    32151923, -3635303, -40000912, -31642539, 17974335, 53348501,
    27231835, -39144022, -69452721, -16173270, 73342953, 92085933,
    -9768438, -144109652, -139705126, 98696816, 474193985, 748018526,
    727531740, 427474966, 57470035, -152738943, -131404989, 7868990,
    96532805, 63848022, -26736237, -70058906, -31123939, 33904163,
    51831947, 11166745, -35652471, -37269494, 1988519, 34179589,
    25011758, -10635672, -30624756, -14638281, 15910303, 25759997,
    6042071, -18525666, -20192916, 796118, 19032739, 14428826,
    -5902611, -17917607, -8885604, 9351380, 15633503, 3892909,
    -11277260, -12604221, 311553, 11873312, 9215320, -3583211,
    -11378547, -5801539, 5866965, 10060177, 2635201, -7188214,
    -8193616, 81698, 7639189, 6042890, -2220351, -7361883,
    -3843519, 3722631, 6529230, 1789398, -4593639, -5326289,
    -24568, 4890324, 3933059, -1359861, -4707528, -2510232,
    2323906, 4162968, 1188824, -2872789, -3382636, -64087,
    3047970, 2487880, -806326, -2916415, -1585139, 1400385,
    2559354, 758886, -1726703, -2061713, -67976, 1817489,
    1503141, -454822, -1720520, -951267, 800590, 1491077,
    457480, -980041, -1184726, -55236, 1018108, 851519,
    -239421, -948146, -531992, 425573, 806456, 255040,
    -513993, -627659, -37535, 523164, 441288, -114612,
    -475326, -269727, 204394, 392989, 127459, -241072,
    -296248, -21419, 237441, 201025, -47814, -207323,
    -118263, 84349, 163569, 53946, -95135, -116692,
    -9752, 88241, 74173, -15899, -71434, -40353,
    26641, 51193, 16796, -27003, -32183, -2938,
    21452, 17141, -3128, -13725, -12852, 1894,
    20725, 17763, -11436, -35241, -18525, 28802,
    51405, 11388, -54802, -65561, 7616, 88526,
    72396, -41869, -126717, -65326, 93160, 163374,
    37293, -160596, -189752, 18036, 239617, 194872,
    -104758, -321317, -166632, 223074, 392308, 93521,
    -367730, -435304, 33193, 526845, 430561, -216989,
    -681448, -358182, 453677, 805980, 201185, -729406,
    -869991, 50945, 1019554, 841066, -398600, -1288866,
    -688908, 828817, 1493176, 390259, -1313027, -1582852,
    65790, 1806350, 1507922, -672773, -2248911, -1224581,
    1402814, 2569454, 702547, -2204357, -2691330, 67502,
    3002343, 2540595, -1067318, -3701318, -2055678, 2246292,
    4191713, 1197760, -3519409, -4359167, 39207, 4768717,
    4096396, -1620060, -5848790, -3316737, 3462768, 6596263,
    1968174, -5436635, -6843077, -46440, 7365125, 6432641,
    -2394253, -9033670, -5237650, 5234224, 10202286, 3178060,
    -8286128, -10622263, -237526, 11298110, 10055639, -3523294,
    -13962237, -8295685, 7957875, 15927269, 5186220, -12830103,
    -16813860, -637338, 17815433, 16228927, -5365112, -22505213,
    -13773977, 12759252, 26409988, 9038477, -21420072, -28952834,
    -1561169, 31192410, 29432778, -9279385, -41960401, -26907830,
    24549209, 53801395, 19844896, -46560532, -67398195, -4950377,
    81652105, 85550522, -28041695, -154541017, -122735444, 142275517,
    519260147, 763606072, 702394394, 379636837, 18973148, -161885786,
    -116783259, 24566190, 98885651, 53391725, -36451717, -69243634,
    -22673957, 39745342, 49304214, 4266964, -38870728, -33834302,
    7479600, 35485959, 21202484, -14797801, -30523247, -10837891,
    18830887, 24656317, 2528504, -20320164, -18432476, 3830309,
    19846953, 12308413, -8339292, -17921751, -6654920, 11137990,
    15012308, 1752947, -12417526, -11545518, 2209989, 12416762,
    7898742, -5139215, -11408962, -4388576, 7026865, 9683538,
    1261448, -7940496, -7526325, 1311582, 8007412, 5201024,
    -3234793, -7396205, -2933794, 4482516, 6297315, 902333,
    -5089274, -4904362, 769910, 5136547, 3397801, -2014345,
    -4737625, -1932080, 2813171, 4022097, 627015, -3191575,
    -3121412, 436378, 3207390, 2156672, -1215846, -2939539,
    -1229476, 1704277, 2476542, 416229, -1923385, -1906172,
    234099, 1915783, 1307110, -699098, -1736471, -743089,
    979559, 1444731, 259687, -1094405, -1097185, 116358,
    1074766, 742543, -375723, -957980, -418277, 523501,
    782198, 149224, -575283, -582060, 52112, 552934,
    385723, -183947, -480603, -213299, 252739, 381394,
    76590, -270326, -274946, 20131, 251113, 176006,
    -78622, -209632, -93964, 104791, 158698, 33171,
    -106782, -108266, 6173, 93264, 64952, -26818,
    -72106, -32142, 33192, 49533, 10514, -30244,
    -29740, 1201, 22546, 14922, -5391, -13707,
    -11947, 4558, 21985, 15207, -15617, -35743,
    -13424, 34258, 49886, 2964, -60695, -60398,
    19749, 93284, 61805, -57393, -127994, -47682,
    110743, 158163, 11569, -177658, -174673, 51770,
    252233, 166656, -144822, -324341, -122789, 265767,
    379758, 33119, -407105, -401049, 108713, 554788,
    369278, -303094, -688133, -266530, 542269, 780760,
    79064, -808741, -802711, 199200, 1074680, 723732,
    -563306, -1302676, -517565, 994508, 1448089, 166878,
    -1458704, -1463067, 331698, 1906561, 1302078, -963081,
    -2275727, -928584, 1690539, 2495320, 322224, -2454499,
    -2492628, 514296, 3173939, 2201649, -1549528, -3750757,
    -1572808, 2719797, 4077194, 582915, -3928715, -4046026,
    755749, 5050373, 3562885, -2388433, -5936475, -2559693,
    4214121, 6427344, 1007962, -6085893, -6366223, 1069481,
    7816026, 5615909, -3589740, -9185970, -4076351, 6405315,
    9960803, 1701643, -9304634, -9907233, 1485249, 12017997,
    8813670, -5381488, -14228554, -6510540, 9798200, 15587144,
    2888677, -14459478, -15728824, 2086431, 19005880, 14287661,
    -8366811, -23000076, -10904479, 15822817, 25929546, 5218671,
    -24255186, -27195775, 3172950, 33422543, 26066490, -14828947,
    -43094247, -21531159, 30752752, 53158475, 11876922, -53207555,
    -63896542, 6726179, 88566600, 76972278, -46620900, -162363301,
    -101835879, 187786848, 562152177, 774104634, 672910499, 331218344,
    -16461746, -167247323, -100615006, 40048400, 99177941, 42209416,
    -45153852, -67060666, -13971986, 44657755, 45836669, -2585375,
    -41247367, -29776336, 12729952, 36056105, 17022440, -18601308,
    -29806898, -6869683, 21333079, 23068490, -992837, -21682418,
    -16320196, 6752096, 20250715, 9962707, -10580684, -17563423,
    -4313382, 12680541, 14093917, -400437, -13294950, -10263966,
    4044617, 12703558, 6435443, -6575825, -11208222, -2900708,
    8033190, 9114632, -124389, -8524731, -6713249, 2502887,
    8209977, 4262157, -4173797, -7280503, -1973683, 5144149,
    5940259, 5867, -5476938, -4387429, 1540760, 5276308,
    2799258, -2621322, -4671529, -1320856, 3240367, 3801317,
    58499, -3442352, -2799844, 922558, 3300151, 1785488,
    -1596188, -2902919, -852978, 1970194, 2344577, 69157,
    -2078827, -1713916, 527798, 1974118, 1087043, -926193,
    -1717089, -522522, 1136410, 1369757, 59241, -1185106,
    -988626, 283259, 1108898, 620068, -502493, -948292,
    -297753, 609394, 742479, 41995, -623994, -525398,
    139284, 571039, 323263, -248409, -476068, -153524,
    295127, 362288, 25092, -293572, -248480, 60480,
    259438, 147923, -107212, -207650, -68279, 122668,
    150724, 12198, -115994, -97849, 21579, 96268,
    54656, -36897, -71297, -23517, 38870, 46918,
    4226, -32757, -26779, 5156, 23133, 12493,
    -7433, -13404, -10734, 7251, 22829, 12221,
    -19629, -35508, -7861, 39175, 47273, -5779,
    -65493, -53830, 31803, 96226, 49657, -72113,
    -126647, -28633, 126439, 149562, -14960, -191414,
    -155668, 85126, 259897, 134447, -182672, -320735,
    -75602, 303763, 359163, -29029, -438783, -357960,
    183261, 571783, 299410, -384346, -680783, -167981,
    621079, 739127, -46495, -872639, -717984, 345485,
    1108535, 589920, -718722, -1289960, -333314, 1142007,
    1372730, -62815, -1576355, -1311788, 594140, 1968959,
    1067042, -1237186, -2256264, -610055, 1947042, 2369239,
    -69090, -2657268, -2240658, 955590, 3282503, 1813907,
    -2005327, -3724002, -1052547, 3142746, 3878063, -50352,
    -4261976, -3646879, 1464270, 5231668, 2951055, -3115815,
    -5903685, -1742667, 4886892, 6125347, 17549, -6617226,
    -5754509, 2174608, 8111646, 4676326, -4723672, -9152040,
    -2820274, 7457082, 9513368, 175803, -10143122, -8982600,
    3194938, 12499528, 7378997, -7148645, -14206804, -4573838,
    11457498, 14924820, 507528, -15810904, -14310317, 4797910,
    19821208, 12031806, -11232763, -23030458, -7776540, 18601395,
    24912257, 1240873, -26633006, -24856648, 7912621, 35002545,
    22111251, -20169193, -43364512, -15609891, 36451076, 51408980,
    3476247, -58930404, -58977800, 18634871, 93897540, 66437718,
    -65155388, -167267118, -77068565, 234775449, 602368627, 779386163,
    639434995, 282755747, -48552228, -168975131, -83278871, 54074059,
    97480204, 30542718, -52701011, -63588934, -5196636, 48564206,
    41517786, -9254256, -42750078, -25187621, 17638152, 35890050,
    12561196, -21974831, -28498650, -2815829, 23371898, 21034643,
    -4450840, -22590139, -13902838, 9503794, 20240509, 7441586,
    -12583647, -16853769, -1909486, 13950419, 12899983, -2523569,
    -13894472, -8787734, 5778975, 12730462, 4856479, -7865162,
    -10782666, -1368772, 8867084, 8366852, -1494150, -8930736,
    -5772266, 3631882, 8244404, 3246246, -5019098, -7018595,
    -983118, 5695111, 5466534, -881760, -5749866, -3786913,
    2272615, 5307860, 2150195, -3168992, -4511576, -689280,
    3597495, 3505944, -505142, -3620773, -2425095, 1384767,
    3325109, 1382288, -1939976, -2807968, -463504, 2193189,
    2166698, -275252, -2190366, -1489276, 807275, 1991797,
    847692, -1131721, -1663208, -294190, 1268249, 1268047,
    -139763, -1250621, -861530, 442149, 1120125, 486765,
    -617298, -919560, -172963, 681691, 688335, -64455,
    -659330, -458994, 222255, 577301, 255286, -306774,
    -461979, -91671, 330804, 336194, -25981, -310450,
    -217484, 98832, 262350, 117408, -133050, -201507,
    -41759, 137672, 139876, -8542, -122641, -85702,
    36166, 97245, 43523, -45953, -69064, -14667,
    43586, 43433, -1940, -34515, -23379, 8851,
    23221, 9916, -9223, -12837,
];

pub static SRC_INT32_10_9_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_10_9_4535_5000",
    input_stride: 8,
    output_stride: 9,
    subfilter_count: 10,
    subfilter_length: 112,
    block_in: 9,
    block_out: 10,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_10_9_4535_5000_FIR),
};

static SRC_INT32_10_9_4535_5000_FIR: [i32; 1120] = [
    -29820, 52235, -81813, 118563, -161754, 209732,
    -259753, 307856, -348786, 375983, -381661, 356976,
    -292303, 177625, -3023, -240727, 561470, -964922,
    1453885, -2027450, 2680232, -3401683, 4175511, -4979264,
    5784112, -6554849, 7250174, -7823233, 8222459, -8392693,
    8276562, -7816101, 6954559, -5638333, 3818973, -1455162,
    -1485399, 5024304, -9171029, 13921918, -19259628, 25153162,
    -31558585, 38420554, -45674867, 53252310, -61084354, 69111711,
    -77297839, 85651934, -94272188, 103437617, -113834324, 127235258,
    -149261861, 209569857, 2039972652, -2400033, -47087867, 63069614,
    -69706664, 72066172, -71915485, 70072670, -67003117, 63018621,
    -58355687, 53209530, -47749554, 42126348, -36474568, 30913811,
    -25548561, 20467788, -15744560, 11435841, -7582597, 4210251,
    -1329497, -1062550, 2980907, -4451046, 5507038, -6189609,
    6544166, -6618872, 6462826, -6124413, 5649854, -5082007,
    4459422, -3815669, 3178934, -2571861, 2011628, -1510220,
    1074863, -708580, 410840, -178240, 5208, 115327,
    -191305, 230984, -242466, 233332, -210355, 179325,
    -144950, 110845, -79576, 52762, -25313, 46640,
    -76492, 115715, -164557, 222446, -287774, 357693,
    -427953, 492790, -544879, 575394, -574149, 529876,
    -430608, 264198, -18946, -315660, 748127, -1284073,
    1925325, -2669023, 3506793, -4424011, 5399221, -6403745,
    7401522, -8349214, 9196597, -9887253, 10359559, -10547956,
    10384480, -9800488, 8728532, -7104301, 4868533, -1968795,
    -1638996, 5989450, -11107150, 17006861, -23694791, 31171268,
    -39435434, 48492939, -58368372, 69125744, -80903703, 93979996,
    -108899624, 126758057, -149920953, 184252042, -248555709, 450650122,
    1979365150, -177224280, 49492513, -2375328, -21727739, 35693227,
    -44050438, 48831133, -51111280, 51540217, -50555331, 48479544,
    -45569064, 42037895, -38070676, 33829349, -29456513, 25076962,
    -20798325, 16711304, -12889843, 9391415, -6257527, 3514495,
    -1174516, -763016, 2309952, -3487670, 4325242, -4857555,
    5123458, -5163982, 5020702, -4734272, 4343179, -3882731,
    3384296, -2874790, 2376406, -1906561, 1478045, -1099325,
    774987, -506269, 291640, -127421, 8378, 71707,
    -119530, 141819, -144985, 134846, -116440, 93923,
    -70531, 48606, -17788, 36062, -63536, 101850,
    -152238, 215295, -290720, 377058, -471464, 569487,
    -664922, 749727, -814036, 846283, -833457, 761483,
    -615748, 381764, -45944, -403499, 975587, -1675560,
    2503853, -3455110, 4517289, -5670895, 6888401, -8133893,
    9362977, -10522975, 11553434, -12386931, 12950188, -13165432,
    12951983, -12227972, 10912114, -8925413, 6192660, -2643533,
    -1786904, 7158633, -13528430, 20953568, -29498444, 39245755,
    -50315169, 62895029, -77298374, 94067867, -114188550, 139566550,
    -174269423, 228466022, -335863163, 710608455, 1861394635, -309469038,
    133186258, -63497224, 25793639, -2326585, -13297070, 23959825,
    -31172364, 35823955, -38492277, 39586594, -39419349, 38243914,
    -36275121, 33700516, -30686442, 27381152, -23916281, 20407405,
    -16954203, 13640505, -10534419, 7688655, -5141103, 2915676,
    -1023429, -536106, 1773382, -2707180, 3362874, -3770692,
    3964019, -3977808, 3847141, -3605967, 3286060, -2916197,
    2521567, -2123409, 1738860, -1380986, 1058990, -778536,
    542181, -349868, 199456, -87243, 8483, 42158,
    -70191, 80968, -79424, 69891, -55981, 40545,
    -7669, 21082, -43597, 77532, -125032, 187842,
    -267032, 362709, -473714, 597339, -729065, 862359,
    -988543, 1096762, -1174074, 1205668, -1175236, 1065498,
    -858877, 538324, -88270, -504323, 1248833, -2149824,
    3205910, -4408674, 5741718, -7179870, 8688614, -10223767,
    11731456, -13148387, 14402440, -15413548, 16094846, -16354020,
    16094785, -15218357, 13624793, -11213967, 7885947, -3540369,
    -1925703, 8622249, -16674391, 26236315, -37514956, 50810975,
    -66592359, 85634371, -109307364, 140234151, -184024695, 254932653,
    -402070415, 977579102, 1692343107, -396523462, 198316556, -115396070,
    68795841, -38631662, 17565021, -2255109, -9046841, 17358990,
    -23330110, 27408809, -29929339, 31157571, -31316494, 30600528,
    -29183479, 27222766, -24861458, 22229027, -19441436, 16600899,
    -13795605, 11099540, -8572513, 6260445, -4195949, 2399166,
    -878869, -366243, 1346084, -2077625, 2583297, -2889416,
    3024673, -3018739, 2901034, -2699668, 2440595, -2146963,
    1838691, -1532223, 1240486, -972991, 736066, -533202,
    365455, -231899, 130087, -56501, 6973, 22946,
    -37672, 41341, -37632, 29645, 4307, 2766,
    -18048, 44354, -84586, 141519, -217545, 314363,
    -432654, 571730, -729200, 900647, -1079370, 1256193,
    -1419378, 1554662, -1645434, 1673081, -1617497, 1457763,
    -1173000, 743368, -151197, -617782, 1573159, -2718549,
    4050334, -5556513, 7215685, -8996246, 10855817, -12740960,
    14587193, -16319304, 17851970, -19090611, 19932438, -20267577,
    19980122, -18948914, 17047756, -14144644, 10099420, -4758898,
    -2052049, 10546020, -20999923, 33802052, -49537764, 69154465,
    -94305174, 128144538, -177468267, 259882306, -438714524, 1238750260,
    1481130500, -438628226, 241118882, -154230082, 103793577, -70140681,
    45841807, -27480004, 13265149, -2162794, -6476503, 13093021,
    -18008120, 21473235, -23697423, 24863100, -25134930, 24664640,
    -23593342, 22052357, -20163160, 18036863, -15773523, 13461469,
    -11176773, 8982950, -6930942, 5059391, -3395203, 1954377,
    -743062, -241206, 1008146, -1573303, 1956599, -2180937,
    2270878, -2251449, 2147108, -1980880, 1773689, -1543874,
    1306893, -1075202, 858274, -662766, 492766, -350132,
    234870, -145527, 79596, -33885, 4853, 11099,
    -17402, 17142, 17142, -17402, 11099, 4853,
    -33885, 79596, -145527, 234870, -350132, 492766,
    -662766, 858274, -1075202, 1306893, -1543874, 1773689,
    -1980880, 2147108, -2251449, 2270878, -2180937, 1956599,
    -1573303, 1008146, -241206, -743062, 1954377, -3395203,
    5059391, -6930942, 8982950, -11176773, 13461469, -15773523,
    18036863, -20163160, 22052357, -23593342, 24664640, -25134930,
    24863100, -23697423, 21473235, -18008120, 13093021, -6476503,
    -2162794, 13265149, -27480004, 45841807, -70140681, 103793577,
    -154230082, 241118882, -438628226, 1481130500, 1238750260, -438714524,
    259882306, -177468267, 128144538, -94305174, 69154465, -49537764,
    33802052, -20999923, 10546020, -2052049, -4758898, 10099420,
    -14144644, 17047756, -18948914, 19980122, -20267577, 19932438,
    -19090611, 17851970, -16319304, 14587193, -12740960, 10855817,
    -8996246, 7215685, -5556513, 4050334, -2718549, 1573159,
    -617782, -151197, 743368, -1173000, 1457763, -1617497,
    1673081, -1645434, 1554662, -1419378, 1256193, -1079370,
    900647, -729200, 571730, -432654, 314363, -217545,
    141519, -84586, 44354, -18048, 2766, 4307,
    29645, -37632, 41341, -37672, 22946, 6973,
    -56501, 130087, -231899, 365455, -533202, 736066,
    -972991, 1240486, -1532223, 1838691, -2146963, 2440595,
    -2699668, 2901034, -3018739, 3024673, -2889416, 2583297,
    -2077625, 1346084, -366243, -878869, 2399166, -4195949,
    6260445, -8572513, 11099540, -13795605, 16600899, -19441436,
    22229027, -24861458, 27222766, -29183479, 30600528, -31316494,
    31157571, -29929339, 27408809, -23330110, 17358990, -9046841,
    -2255109, 17565021, -38631662, 68795841, -115396070, 198316556,
    -396523462, 1692343107, 977579102, -402070415, 254932653, -184024695,
    140234151, -109307364, 85634371, -66592359, 50810975, -37514956,
    26236315, -16674391, 8622249, -1925703, -3540369, 7885947,
    -11213967, 13624793, -15218357, 16094785, -16354020, 16094846,
    -15413548, 14402440, -13148387, 11731456, -10223767, 8688614,
    -7179870, 5741718, -4408674, 3205910, -2149824, 1248833,
    -504323, -88270, 538324, -858877, 1065498, -1175236,
    1205668, -1174074, 1096762, -988543, 862359, -729065,
    597339, -473714, 362709, -267032, 187842, -125032,
    77532, -43597, 21082, -7669, 40545, -55981,
    69891, -79424, 80968, -70191, 42158, 8483,
    -87243, 199456, -349868, 542181, -778536, 1058990,
    -1380986, 1738860, -2123409, 2521567, -2916197, 3286060,
    -3605967, 3847141, -3977808, 3964019, -3770692, 3362874,
    -2707180, 1773382, -536106, -1023429, 2915676, -5141103,
    7688655, -10534419, 13640505, -16954203, 20407405, -23916281,
    27381152, -30686442, 33700516, -36275121, 38243914, -39419349,
    39586594, -38492277, 35823955, -31172364, 23959825, -13297070,
    -2326585, 25793639, -63497224, 133186258, -309469038, 1861394635,
    710608455, -335863163, 228466022, -174269423, 139566550, -114188550,
    94067867, -77298374, 62895029, -50315169, 39245755, -29498444,
    20953568, -13528430, 7158633, -1786904, -2643533, 6192660,
    -8925413, 10912114, -12227972, 12951983, -13165432, 12950188,
    -12386931, 11553434, -10522975, 9362977, -8133893, 6888401,
    -5670895, 4517289, -3455110, 2503853, -1675560, 975587,
    -403499, -45944, 381764, -615748, 761483, -833457,
    846283, -814036, 749727, -664922, 569487, -471464,
    377058, -290720, 215295, -152238, 101850, -63536,
    36062, -17788, 48606, -70531, 93923, -116440,
    134846, -144985, 141819, -119530, 71707, 8378,
    -127421, 291640, -506269, 774987, -1099325, 1478045,
    -1906561, 2376406, -2874790, 3384296, -3882731, 4343179,
    -4734272, 5020702, -5163982, 5123458, -4857555, 4325242,
    -3487670, 2309952, -763016, -1174516, 3514495, -6257527,
    9391415, -12889843, 16711304, -20798325, 25076962, -29456513,
    33829349, -38070676, 42037895, -45569064, 48479544, -50555331,
    51540217, -51111280, 48831133, -44050438, 35693227, -21727739,
    -2375328, 49492513, -177224280, 1979365150, 450650122, -248555709,
    184252042, -149920953, 126758057, -108899624, 93979996, -80903703,
    69125744, -58368372, 48492939, -39435434, 31171268, -23694791,
    17006861, -11107150, 5989450, -1638996, -1968795, 4868533,
    -7104301, 8728532, -9800488, 10384480, -10547956, 10359559,
    -9887253, 9196597, -8349214, 7401522, -6403745, 5399221,
    -4424011, 3506793, -2669023, 1925325, -1284073, 748127,
    -315660, -18946, 264198, -430608, 529876, -574149,
    575394, -544879, 492790, -427953, 357693, -287774,
    222446, -164557, 115715, -76492, 46640, -25313,
    52762, -79576, 110845, -144950, 179325, -210355,
    233332, -242466, 230984, -191305, 115327, 5208,
    -178240, 410840, -708580, 1074863, -1510220, 2011628,
    -2571861, 3178934, -3815669, 4459422, -5082007, 5649854,
    -6124413, 6462826, -6618872, 6544166, -6189609, 5507038,
    -4451046, 2980907, -1062550, -1329497, 4210251, -7582597,
    11435841, -15744560, 20467788, -25548561, 30913811, -36474568,
    42126348, -47749554, 53209530, -58355687, 63018621, -67003117,
    70072670, -71915485, 72066172, -69706664, 63069614, -47087867,
    -2400033, 2039972652, 209569857, -149261861, 127235258, -113834324,
    103437617, -94272188, 85651934, -77297839, 69111711, -61084354,
    53252310, -45674867, 38420554, -31558585, 25153162, -19259628,
    13921918, -9171029, 5024304, -1485399, -1455162, 3818973,
    -5638333, 6954559, -7816101, 8276562, -8392693, 8222459,
    -7823233, 7250174, -6554849, 5784112, -4979264, 4175511,
    -3401683, 2680232, -2027450, 1453885, -964922, 561470,
    -240727, -3023, 177625, -292303, 356976, -381661,
    375983, -348786, 307856, -259753, 209732, -161754,
    118563, -81813, 52235, -29820,
];

pub static SRC_INT32_10_21_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_10_21_2500_5000",
    input_stride: 2,
    output_stride: 1,
    subfilter_count: 10,
    subfilter_length: 44,
    block_in: 21,
    block_out: 10,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_10_21_2500_5000_FIR),
};

static SRC_INT32_10_21_2500_5000_FIR: [i32; 440] = [
    -43131, -265171, -220959, 720670, 1775528, 495749,
    -3682566, -5802387, 529030, 12090578, 13248751, -6561999,
    -30737159, -23478050, 25362662, 67485972, 33457433, -76248324,
    -147607209, -36325805, 277753160, 625464285, 766541686, 596450073,
    240819553, -57801020, -146794024, -64402328, 41201477, 65791019,
    19560871, -26342432, -29164927, -3860371, 14066595, 11096552,
    -511318, -5903060, -3233622, 783491, 1732233, 590576,
    -260529, -242306, -59077, -285738, -171113, 853823,
    1794055, 173450, -4113229, -5608352, 1634760, 12977404,
    12194955, -9328439, -31972904, -20140355, 31122592, 68356213,
    24846057, -87746055, -146480455, -12642143, 315093872, 652285558,
    763212716, 565471902, 204544646, -76998493, -144167384, -52372282,
    48024594, 63333639, 13794428, -28719683, -27294392, -1256183,
    14650816, 10015409, -1476000, -5915406, -2774305, 1035185,
    1667101, 465413, -290289, -217957, -77261, -303144,
    -110687, 987915, 1785049, -181209, -4517384, -5317021,
    2793912, 13737293, 10906181, -12124318, -32836685, -16350427,
    36760124, 68347281, 15434884, -98726703, -143301387, 13158025,
    352581127, 676700714, 756581980, 532772294, 169168830, -93871683,
    -139866115, -40316193, 53887131, 60182802, 8136372, -30603089,
    -25165795, 1220982, 15006833, 8867269, -2356459, -5845412,
    -2312107, 1250021, 1583169, 346787, -310843, -192874,
    -97515, -316486, -39559, 1120587, 1745975, -565305,
    -4886599, -4925695, 3992925, 14351175, 9386880, -14911891,
    -33296374, -12136675, 42192320, 67413626, 5305202, -109018565,
    -137973381, 40960473, 389947750, 698514503, 746703607, 498604923,
    134919215, -108396675, -134039548, -28384367, 58763230, 56412996,
    2654816, -31992787, -22820790, 3544843, 15142919, 7672006,
    -3145882, -5699867, -1854018, 1427828, 1483517, 236037,
    -322906, -167734, -119586, -324841, 42185, 1249271,
    1674594, -975180, -5212361, -4433040, 5216746, 14800970,
    7645108, -17651454, -33323817, -7534809, 47334845, 65519625,
    -5448301, -118448860, -130417089, 70629287, 426922407, 717551549,
    733658105, 463232136, 102007708, -120571808, -126845606, -16718065,
    62640514, 52103031, -2587710, -32895435, -20301811, 5692607,
    15069920, 6448971, -3839197, -5486207, -1406450, 1569030,
    1371215, 134234, -327283, -143134, -143134, -327283,
    134234, 1371215, 1569030, -1406450, -5486207, -3839197,
    6448971, 15069920, 5692607, -20301811, -32895435, -2587710,
    52103031, 62640514, -16718065, -126845606, -120571808, 102007708,
    463232136, 733658105, 717551549, 426922407, 70629287, -130417089,
    -118448860, -5448301, 65519625, 47334845, -7534809, -33323817,
    -17651454, 7645108, 14800970, 5216746, -4433040, -5212361,
    -975180, 1674594, 1249271, 42185, -324841, -119586,
    -167734, -322906, 236037, 1483517, 1427828, -1854018,
    -5699867, -3145882, 7672006, 15142919, 3544843, -22820790,
    -31992787, 2654816, 56412996, 58763230, -28384367, -134039548,
    -108396675, 134919215, 498604923, 746703607, 698514503, 389947750,
    40960473, -137973381, -109018565, 5305202, 67413626, 42192320,
    -12136675, -33296374, -14911891, 9386880, 14351175, 3992925,
    -4925695, -4886599, -565305, 1745975, 1120587, -39559,
    -316486, -97515, -192874, -310843, 346787, 1583169,
    1250021, -2312107, -5845412, -2356459, 8867269, 15006833,
    1220982, -25165795, -30603089, 8136372, 60182802, 53887131,
    -40316193, -139866115, -93871683, 169168830, 532772294, 756581980,
    676700714, 352581127, 13158025, -143301387, -98726703, 15434884,
    68347281, 36760124, -16350427, -32836685, -12124318, 10906181,
    13737293, 2793912, -5317021, -4517384, -181209, 1785049,
    987915, -110687, -303144, -77261, -217957, -290289,
    465413, 1667101, 1035185, -2774305, -5915406, -1476000,
    10015409, 14650816, -1256183, -27294392, -28719683, 13794428,
    63333639, 48024594, -52372282, -144167384, -76998493, 204544646,
    565471902, 763212716, 652285558, 315093872, -12642143, -146480455,
    -87746055, 24846057, 68356213, 31122592, -20140355, -31972904,
    -9328439, 12194955, 12977404, 1634760, -5608352, -4113229,
    173450, 1794055, 853823, -171113, -285738, -59077,
    -242306, -260529, 590576, 1732233, 783491, -3233622,
    -5903060, -511318, 11096552, 14066595, -3860371, -29164927,
    -26342432, 19560871, 65791019, 41201477, -64402328, -146794024,
    -57801020, 240819553, 596450073, 766541686, 625464285, 277753160,
    -36325805, -147607209, -76248324, 33457433, 67485972, 25362662,
    -23478050, -30737159, -6561999, 13248751, 12090578, 529030,
    -5802387, -3682566, 495749, 1775528, 720670, -220959,
    -265171, -43131,
];

pub static SRC_INT32_10_21_3455_5000: StageDescriptor = StageDescriptor {
    name: "int32_10_21_3455_5000",
    input_stride: 2,
    output_stride: 1,
    subfilter_count: 10,
    subfilter_length: 72,
    block_in: 21,
    block_out: 10,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_10_21_3455_5000_FIR),
};

static SRC_INT32_10_21_3455_5000_FIR: [i32; 720] = [
    52844, 24515, -166661, -229861, 193999, 669728,
    172104, -1131628, -1218335, 1007671, 2824320, 514970,
    -4091137, -3848968, 3367452, 8201440, 1021795, -11111200,
    -9425447, 8942137, 19509014, 1420712, -25832649, -20132966,
    21099528, 42315778, 982988, -57499172, -42321030, 50752097,
    98322822, -2846660, -158931826, -125730597, 216736788, 669350780,
    864035451, 629966987, 171837174, -143316210, -147728334, 13116785,
    99732741, 40882499, -48453856, -53710005, 7370363, 42878141,
    16718553, -22807188, -23997316, 4314711, 19648029, 6921239,
    -10541840, -10234388, 2239887, 8192227, 2531014, -4245274,
    -3727519, 941783, 2791529, 729839, -1322150, -1015905,
    278551, 651466, 133537, -243235, -145318, 35517,
    56473, 11481, -186883, -210825, 255721, 677156,
    55550, -1234508, -1087442, 1282863, 2810393, 59269,
    -4401752, -3370907, 4181360, 8073749, -258961, -11834723,
    -8113535, 10883345, 19042615, -1590425, -27300234, -17042493,
    25271063, 41039138, -5626885, -60468697, -35277278, 60155673,
    95232905, -19515590, -168130521, -104742324, 262907309, 705967455,
    859385072, 588188970, 128566037, -157490975, -134790331, 28164755,
    99507119, 30717528, -53610045, -49187413, 13440846, 42739183,
    12204432, -25035090, -21834980, 7048761, 19467869, 4855827,
    -11451264, -9223797, 3377817, 8051375, 1686554, -4556669,
    -3319123, 1333967, 2714766, 454130, -1398581, -890030,
    373682, 623405, 75327, -251155, -123376, 44463,
    59152, -3511, -205440, -186020, 317614, 672849,
    -69632, -1321931, -930282, 1550455, 2747691, -418809,
    -4651700, -2815789, 4958031, 7806020, -1583174, -12387334,
    -6621234, 12709837, 18245813, -4672574, -28364133, -13573646,
    29157927, 39046551, -12358231, -62542792, -27405177, 68923710,
    90442836, -36660018, -175067983, -80398648, 309969656, 739467681,
    850129991, 544408865, 87255756, -168284921, -120398159, 42109369,
    97713198, 20426365, -57741215, -44026375, 19107961, 41922603,
    7633278, -26794663, -19390391, 9583960, 18981640, 2780657,
    -12146014, -8100444, 4420021, 7786108, 848155, -4781525,
    -2874566, 1686613, 2597390, 185034, -1447805, -756720,
    456554, 586692, 20249, -253920, -101325, 51381,
    60671, -20330, -221772, -155445, 378504, 656072,
    -201713, -1391413, -748184, 1805368, 2634915, -912066,
    -4834033, -2189831, 5682814, 7397380, -2930193, -12753671,
    -4967225, 14387340, 17121002, -7776951, -28993960, -9771729,
    32687222, 36348006, -19104814, -63657641, -18803420, 76890482,
    83957967, -54032403, -179505338, -52786272, 357527235, 769529760,
    836361023, 499033532, 48210185, -175764983, -104838373, 54786605,
    94439226, 10174235, -60816504, -38328885, 24294266, 40462143,
    3079812, -28072065, -16711463, 11885824, 18206979, 729509,
    -12622132, -6886456, 5353058, 7405425, 29251, -4919711,
    -2402703, 1995693, 2443282, -73291, -1470458, -618669,
    526500, 542554, -30936, -251902, -79616, 56337,
    60830, -38793, -235322, -119222, 437151, 626275,
    -338729, -1440655, -542995, 2042489, 2471585, -1412710,
    -4942668, -1500724, 6341358, 6849321, -4278226, -12920965,
    -3173546, 15882928, 15676122, -10852845, -29165560, -5688952,
    35789649, 32965350, -25756746, -63762810, -9585807, 83896746,
    75810033, -71370406, -181224842, -22031230, 405170194, 795863383,
    818213041, 452479894, 11701717, -180033255, -88399925, 66057676,
    89792423, 120044, -62822482, -32202148, 28932302, 38400756,
    -1383786, -28861598, -13848406, 13924704, 17165623, -1265330,
    -12879350, -5604668, 6165758, 6919882, -757565, -4972536,
    -1912466, 2258083, 2256762, -317077, -1467595, -478501,
    583120, 492271, -77594, -245540, -58654, 59441,
    59441, -58654, -245540, -77594, 492271, 583120,
    -478501, -1467595, -317077, 2256762, 2258083, -1912466,
    -4972536, -757565, 6919882, 6165758, -5604668, -12879350,
    -1265330, 17165623, 13924704, -13848406, -28861598, -1383786,
    38400756, 28932302, -32202148, -62822482, 120044, 89792423,
    66057676, -88399925, -180033255, 11701717, 452479894, 818213041,
    795863383, 405170194, -22031230, -181224842, -71370406, 75810033,
    83896746, -9585807, -63762810, -25756746, 32965350, 35789649,
    -5688952, -29165560, -10852845, 15676122, 15882928, -3173546,
    -12920965, -4278226, 6849321, 6341358, -1500724, -4942668,
    -1412710, 2471585, 2042489, -542995, -1440655, -338729,
    626275, 437151, -119222, -235322, -38793, 60830,
    56337, -79616, -251902, -30936, 542554, 526500,
    -618669, -1470458, -73291, 2443282, 1995693, -2402703,
    -4919711, 29251, 7405425, 5353058, -6886456, -12622132,
    729509, 18206979, 11885824, -16711463, -28072065, 3079812,
    40462143, 24294266, -38328885, -60816504, 10174235, 94439226,
    54786605, -104838373, -175764983, 48210185, 499033532, 836361023,
    769529760, 357527235, -52786272, -179505338, -54032403, 83957967,
    76890482, -18803420, -63657641, -19104814, 36348006, 32687222,
    -9771729, -28993960, -7776951, 17121002, 14387340, -4967225,
    -12753671, -2930193, 7397380, 5682814, -2189831, -4834033,
    -912066, 2634915, 1805368, -748184, -1391413, -201713,
    656072, 378504, -155445, -221772, -20330, 60671,
    51381, -101325, -253920, 20249, 586692, 456554,
    -756720, -1447805, 185034, 2597390, 1686613, -2874566,
    -4781525, 848155, 7786108, 4420021, -8100444, -12146014,
    2780657, 18981640, 9583960, -19390391, -26794663, 7633278,
    41922603, 19107961, -44026375, -57741215, 20426365, 97713198,
    42109369, -120398159, -168284921, 87255756, 544408865, 850129991,
    739467681, 309969656, -80398648, -175067983, -36660018, 90442836,
    68923710, -27405177, -62542792, -12358231, 39046551, 29157927,
    -13573646, -28364133, -4672574, 18245813, 12709837, -6621234,
    -12387334, -1583174, 7806020, 4958031, -2815789, -4651700,
    -418809, 2747691, 1550455, -930282, -1321931, -69632,
    672849, 317614, -186020, -205440, -3511, 59152,
    44463, -123376, -251155, 75327, 623405, 373682,
    -890030, -1398581, 454130, 2714766, 1333967, -3319123,
    -4556669, 1686554, 8051375, 3377817, -9223797, -11451264,
    4855827, 19467869, 7048761, -21834980, -25035090, 12204432,
    42739183, 13440846, -49187413, -53610045, 30717528, 99507119,
    28164755, -134790331, -157490975, 128566037, 588188970, 859385072,
    705967455, 262907309, -104742324, -168130521, -19515590, 95232905,
    60155673, -35277278, -60468697, -5626885, 41039138, 25271063,
    -17042493, -27300234, -1590425, 19042615, 10883345, -8113535,
    -11834723, -258961, 8073749, 4181360, -3370907, -4401752,
    59269, 2810393, 1282863, -1087442, -1234508, 55550,
    677156, 255721, -210825, -186883, 11481, 56473,
    35517, -145318, -243235, 133537, 651466, 278551,
    -1015905, -1322150, 729839, 2791529, 941783, -3727519,
    -4245274, 2531014, 8192227, 2239887, -10234388, -10541840,
    6921239, 19648029, 4314711, -23997316, -22807188, 16718553,
    42878141, 7370363, -53710005, -48453856, 40882499, 99732741,
    13116785, -147728334, -143316210, 171837174, 629966987, 864035451,
    669350780, 216736788, -125730597, -158931826, -2846660, 98322822,
    50752097, -42321030, -57499172, 982988, 42315778, 21099528,
    -20132966, -25832649, 1420712, 19509014, 8942137, -9425447,
    -11111200, 1021795, 8201440, 3367452, -3848968, -4091137,
    514970, 2824320, 1007671, -1218335, -1131628, 172104,
    669728, 193999, -229861, -166661, 24515, 52844,
];

pub static SRC_INT32_10_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_10_21_4535_5000",
    input_stride: 2,
    output_stride: 1,
    subfilter_count: 10,
    subfilter_length: 228,
    block_in: 21,
    block_out: 10,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_10_21_4535_5000_FIR),
};

static SRC_INT32_10_21_4535_5000_FIR: [i32; 2280] = [
    -11890, -16443, 13499, 30436, -9627, -47662,
    -2575, 65479, 25464, -79709, -60183, 84856,
    105917, -74662, -159243, 42997, 213745, 14949,
    -260030, -101323, 286267, 214267, -279310, -346815,
    226392, 486279, -117280, -614341, -53327, 708046,
    283441, -741770, -561857, 690133, 867022, -531669,
    -1167081, 252910, 1421362, 147573, -1583459, -655749,
    1605831, 1239922, -1445683, -1850309, 1071607, 2420844,
    -470310, -2873441, -347417, 3124706, 1342386, -3094755,
    -2445210, 2717467, 3557735, -1951250, -4558132, 789114,
    5309740, 733211, -5673331, -2532405, 5521988, 4477025,
    -4757424, -6392107, 3326184, 8069222, -1234001, -9281795,
    -1443478, 9804886, 4555214, -9438068, -7875818, 8029600,
    11113849, -5499711, -13927461, 1860747, 15946721, 2767953,
    -16801210, -8152200, 16150823, 13943190, -13717195, -19685986,
    9312841, 24835238, -2865080, -28775645, -5568027, 30842739,
    15792030, -30336519, -27482590, 26515002, 40205595, -18542415,
    -53452878, 5334984, 66698825, 14848528, -79496197, -45569038,
    91685164, 96220048, -104101825, -202360741, 123371954, 702691484,
    974232708, 649076609, 71838145, -209063029, -81446897, 106943589,
    79815854, -56447913, -73672536, 24810179, 64803017, -3232509,
    -54221402, -11603191, 42741409, 21287731, -31086906, -26790762,
    19900942, 28856741, -9728576, -28156760, 996129, 25340722,
    6004449, -21044222, -11122407, 15874425, 14344997, -10387604,
    -15784604, 5065843, 15657658, -297581, -14257527, -3635188,
    11924079, 6561648, -9012679, -8418611, 5865293, 9239420,
    -2785919, -9136777, 22028, 8281465, 2247031, -6879165,
    -3914426, 5147542, 4943483, -3295570, -5359597, 1506625,
    5237883, 73625, -4688221, -1344065, 3839449, 2249837,
    -2824292, -2779456, 1766338, 2958308, -770026, -2839689,
    -85866, 2494657, 751112, -2001885, -1203623, 1438528,
    1446285, -872879, -1501850, 359264, 1406732, 64685,
    -1204545, -378495, 940133, 577421, -654622, -669608,
    381864, 672435, -146399, -608595, -37141, 502395,
    163379, -376677, -234627, 250571, 258784, -138186,
    -247039, 48198, 211714, 15814, -164475, -54477,
    115051, 71422, -70518, -71991, 35107, 62046,
    -10438, -47016, -3942, 31252, 9881, -17710,
    -13717, -14755, 16992, 28938, -15325, -47325,
    5606, 67648, 14997, -85986, -48310, 96881,
    94351, -93792, -150586, 69914, 211397, -19329,
    -267921, -61613, 308390, 172837, -319083, -309253,
    285885, 459865, -196395, -607546, 42392, 729681,
    177616, -799825, -456120, 790381, 775022, -676172,
    -1105127, 438612, 1407041, -70050, -1633701, -422284,
    1734554, 1013337, -1661205, -1658920, 1374126, 2296545,
    -849768, -2848759, 87285, 3229077, 886077, -3350303,
    -2011823, 3134700, 3200126, -2525141, -4333395, 1496122,
    5273762, -63333, -5874322, -1709555, 5993534, 3708128,
    -5511713, -5769462, 4348172, 7689917, -2477301, -9238541,
    -58267, 10175540, 3139139, -10274677, -6566815, 9347926,
    10068501, -7270307, -13309496, 4002618, 15912801, 390207,
    -17484838, -5727080, 17645425, 11706474, -16059520, -17910416,
    12467798, 23816155, -6712882, -28813409, -1242035, 32223089,
    11305352, -33310284, -23263379, 31278543, 36805129, -25219834,
    -51573705, 13961719, 67264787, 4345989, -83836145, -33423425,
    102072097, 83051042, -125772472, -190926768, 177845609, 752961867,
    967630836, 592744043, 23716653, -211223090, -58278126, 115113503,
    66744692, -65882984, -66518265, 34045487, 61642963, -11570698,
    -53883735, -4545705, 44375271, 15708735, -34012551, -22752193,
    23554244, 26312774, -13641790, -26976134, 4792652, 25328193,
    2611136, -21962203, -8330277, 17464351, 12267671, -12390037,
    -14458948, 7238207, 15054672, -2428543, -14295850, -1715382,
    12485093, 4975231, -9956070, -7238718, 7043895, 8492489,
    -4058837, -8808267, 1265238, 8324003, 1133127, -7222131,
    -3000679, 5707098, 4270819, -3984211, -4940637, 2241488,
    5060777, -635769, -4722041, -716239, 4040391, 1741832,
    -3141996, -2411464, 2149717, 2733965, -1172124, -2748875,
    295721, 2517100, 419350, -2111072, -940260, 1605490,
    1259545, -1069494, -1390947, 560818, 1363843, -122217,
    -1217108, -219879, 993150, 454714, -732731, -585019,
    471008, 623795, -234982, -590633, 42378, 508066,
    98184, -398373, -186031, 281111, 226603, -171511,
    -229317, 79765, 205442, -11076, -166254, -33676,
    121625, 56888, -79144, -63029, 43753, 57459,
    -17832, -45434, 1612, 31395, 6217, -18550,
    -15345, -12663, 20276, 26762, -20915, -45979,
    13943, 68468, 3902, -90648, -35105, 107207,
    80531, -111446, -138602, 96001, 204624, -53947,
    -270442, -19819, 324590, 127038, -353032, -264623,
    340566, 423517, -272839, -588137, 138830, 736667,
    66448, -842357, -339385, 875915, 665743, -808908,
    -1019604, 617942, 1363659, -289217, -1651123, -177061,
    1829409, 763061, -1845431, -1431141, 1652243, 2123690,
    -1216403, -2765451, 525317, 3268559, 406386, -3540189,
    -1532393, 3492433, 2773105, -3053628, -4017589, 2180089,
    5129540, -866955, -5957282, -843234, 6347378, 2855572,
    -6160970, -5022597, 5291527, 7149639, -3682325, -9006031,
    1341822, 10341885, 1644965, -10909540, -5110726, 10488211,
    8807072, -8909870, -12413395, 6084111, 15553341, -2019631,
    -17818120, -3159820, 18795020, 9206721, -18098822, -15749198,
    15403172, 22298413, -10468545, -28262283, 3163121, 32961841,
    6527481, -35643428, -18506475, 35474085, 32595469, -31494783,
    -48601841, 22473112, 66460720, -6496789, -86564920, -20218425,
    110715550, 67595614, -145983165, -174634038, 234734992, 799294640,
    954507709, 534345370, -20577390, -209088298, -35053381, 120672637,
    52765881, -73729984, -58208575, 42387450, 57307873, -19517306,
    -52466266, 2486523, 45088498, 9895397, -36210265, -18308817,
    26684260, 23269145, -17231751, -25264234, 8448599, 24803734,
    -797626, -22426143, -5399323, 18684404, 9963642, -14121391,
    -12854171, 9242369, 14153082, -4489304, -14044524, 220324,
    12787977, 3303608, -10688785, -5923831, 8068447, 7580983,
    -5237148, -8304718, 2470588, 8197653, 7368, -7415501,
    -2035390, 6145488, 3518575, -4585149, -4426020, 2923325,
    4783114, -1324768, -4659936, -80708, 4157372, 1204185,
    -3392574, -1998824, 2485223, 2456888, -1545809, -2603512,
    666756, 2488340, 83179, -2176186, -661197, 1737834,
    1049747, -1241881, -1253385, 748290, 1293954, -304027,
    -1204871, -59110, 1025295, 324646, -794826, -489909,
    549214, 563321, -317354, -561025, 119678, 503360,
    32169, -411613, -134582, 305377, 190471, -200693,
    -207322, 109045, 195150, -37134, -164625, -12694,
    125571, 41579, -85932, -53042, 51255, 51846,
    -24620, -42982, 6926, 30889, 2586, -18965,
    -16726, -10194, 23272, 23928, -26273, -43615,
    22264, 67879, -7605, -93552, -20807, 115575,
    64689, -127217, -123463, 120696, 193466, -88194,
    -267428, 23235, 334413, 77732, -380345, -213717,
    389220, 377807, -344989, -556300, 234012, 728622,
    -47858, -868248, -213883, 944754, 541173, -926978,
    -911931, 787125, 1291702, -505451, -1634925, 75047,
    1888007, 493921, -1994186, -1171187, 1899956, 1905229,
    -1562547, -2624528, 957744, 3241591, -87132, -3659778,
    -1016221, 3782680, 2284651, -3525401, -3616193, 2826775,
    4878880, -1661287, -5919286, 49287, 6575073, 1935940,
    -6690852, -4165531, 6136170, 6457827, -4824061, -8587146,
    2728316, 10298509, 102463, -11327699, -3535859, 11425400,
    7353205, -10383602, -11254699, 8062096, 14872408, -4412658,
    -17790659, -501390, 19572510, 6492195, -19790180, -13242233,
    18056553, 20307291, -14054294, -27126413, 7558482, 33035655,
    1552066, -37279409, -13301134, 39007313, 27649393, -37232355,
    -44577697, 30693473, 64273185, -17467593, -87583862, -6188517,
    117379396, 50062658, -164260598, -153421452, 293470903, 841138832,
    935023386, 474547769, -60690952, -202958665, -12211008, 123614118,
    38181468, -79879289, -48936840, 49690356, 51908350, -26920887,
    -50016417, 9352841, 44881105, 3968065, -37646079, -13555578,
    29234714, 19793480, -20429970, -23061874, 11891785, 23783684,
    -4152815, -22431566, -2390246, 19513793, 7481826, -15549426,
    -11005541, 11039480, 12974092, -6438871, -13511481, 2132609,
    12829123, 1581435, -11198049, -4501877, 8919718, 6524959,
    -6297928, -7638040, 3614054, 7906645, -1107340, -7456857,
    -1038621, 6455061, 2702790, -5087119, -3827156, 3538884,
    4411574, -1979640, -4504192, 549576, 4188943, 648109,
    -3571702, -1550394, 2766608, 2133295, -1883846, -2407189,
    1019854, 2409580, -250541, -2196457, -372283, 1833320,
    821438, -1386869, -1092308, 918073, 1198853, -477135,
    -1168433, 100522, 1036224, 189964, -839894, -386369,
    615069, 492428, -391949, -520565, 193230, 488553,
    -33313, -416283, -81375, 322998, 151196, -225224,
    -181587, 135492, 181133, -61848, -159701, 8036,
    126873, 25826, -90793, -42261, 57494, 45356,
    -30683, -39740, 11898, 29771, -935, -18966,
    -17815, -7384, 25900, 20470, -31276, -40250,
    30391, 65850, -19297, -94588, -5687, 121759,
    47104, -140733, -105410, 143454, 178059, -121354,
    -258826, 66685, 337530, 25871, -400333, -157470,
    430734, 323515, -411284, -512482, 325959, 705467,
    -163002, -876705, -82062, 995230, 403648, -1027742,
    -784003, 942544, 1192253, -714272, -1584988, 328957,
    1908673, 211195, -2103969, -883985, 2111811, 1645084,
    -1880860, -2428192, 1375641, 3147954, -584528, -3705823,
    -473462, 3998750, 1744089, -3930184, -3136501, 3422546,
    4525784, -2429981, -5759850, 950022, 6670669, 967357,
    -7089315, -3214679, 6863844, 5627113, -5878537, -7988602,
    4072742, 10044230, -1457320, -11518476, -1873228, 12138341,
    5734704, -11659747, -9854468, 9895127, 13880674, -6739818,
    -17399318, 2194853, 19958112, 3616053, -21095286, -10436916,
    20370586, 17878013, -17394905, -25421911, 11854179, 32434435,
    -3521971, -38175087, -7747033, 41795934, 22055808, -42306223,
    -39563736, 38449498, 60716322, -28346585, -86825779, 8408444,
    121857740, 30709004, -180141589, -127296497, 353446375, 877993522,
    909415042, 414024664, -96336858, -193180853, 9836626, 123979769,
    23295522, -84257076, -38910471, 55832156, 45573796, -33643613,
    -46601334, 15918212, 43771520, -1952398, -38301787, -8592371,
    31161705, 15961254, -23176677, -20419266, 15055144, 22294192,
    -7387249, -21983302, 635318, 19939831, 4874226, -16648358,
    -8952902, 12595266, 11544303, -8238905, -12710274, 3983013,
    12610255, -155945, -11475734, -3002675, 9582167, 5347203,
    -7220856, -6823331, 4673097, 7458499, -2188541, -7346881,
    -30868, 6630856, 1840630, -5480973, -3157041, 4076392,
    3954668, -2587487, -4258966, 1161910, 4135397, 85068,
    -3676549, -1075658, 2988792, 1770277, -2179808, -2164483,
    1348079, 2283023, -575082, -2172034, -79493, 1890489,
    579482, -1501882, -911293, 1066971, 1080813, -638158,
    -1108878, 255802, 1026030, 53463, -867282, -276626,
    667436, 412721, -457383, -470256, 261608, 464123,
    -96945, -412445, -27523, 333744, 109638, -244699,
    -152714, 158630, 163758, -84748, -151658, 28100,
    125572, 9962, -93680, -30931, 62379, 38147,
    -35920, -35803, 16439, 28089, -4280, -18573,
    -18573, -4280, 28089, 16439, -35803, -35920,
    38147, 62379, -30931, -93680, 9962, 125572,
    28100, -151658, -84748, 163758, 158630, -152714,
    -244699, 109638, 333744, -27523, -412445, -96945,
    464123, 261608, -470256, -457383, 412721, 667436,
    -276626, -867282, 53463, 1026030, 255802, -1108878,
    -638158, 1080813, 1066971, -911293, -1501882, 579482,
    1890489, -79493, -2172034, -575082, 2283023, 1348079,
    -2164483, -2179808, 1770277, 2988792, -1075658, -3676549,
    85068, 4135397, 1161910, -4258966, -2587487, 3954668,
    4076392, -3157041, -5480973, 1840630, 6630856, -30868,
    -7346881, -2188541, 7458499, 4673097, -6823331, -7220856,
    5347203, 9582167, -3002675, -11475734, -155945, 12610255,
    3983013, -12710274, -8238905, 11544303, 12595266, -8952902,
    -16648358, 4874226, 19939831, 635318, -21983302, -7387249,
    22294192, 15055144, -20419266, -23176677, 15961254, 31161705,
    -8592371, -38301787, -1952398, 43771520, 15918212, -46601334,
    -33643613, 45573796, 55832156, -38910471, -84257076, 23295522,
    123979769, 9836626, -193180853, -96336858, 414024664, 909415042,
    877993522, 353446375, -127296497, -180141589, 30709004, 121857740,
    8408444, -86825779, -28346585, 60716322, 38449498, -39563736,
    -42306223, 22055808, 41795934, -7747033, -38175087, -3521971,
    32434435, 11854179, -25421911, -17394905, 17878013, 20370586,
    -10436916, -21095286, 3616053, 19958112, 2194853, -17399318,
    -6739818, 13880674, 9895127, -9854468, -11659747, 5734704,
    12138341, -1873228, -11518476, -1457320, 10044230, 4072742,
    -7988602, -5878537, 5627113, 6863844, -3214679, -7089315,
    967357, 6670669, 950022, -5759850, -2429981, 4525784,
    3422546, -3136501, -3930184, 1744089, 3998750, -473462,
    -3705823, -584528, 3147954, 1375641, -2428192, -1880860,
    1645084, 2111811, -883985, -2103969, 211195, 1908673,
    328957, -1584988, -714272, 1192253, 942544, -784003,
    -1027742, 403648, 995230, -82062, -876705, -163002,
    705467, 325959, -512482, -411284, 323515, 430734,
    -157470, -400333, 25871, 337530, 66685, -258826,
    -121354, 178059, 143454, -105410, -140733, 47104,
    121759, -5687, -94588, -19297, 65850, 30391,
    -40250, -31276, 20470, 25900, -7384, -17815,
    -18966, -935, 29771, 11898, -39740, -30683,
    45356, 57494, -42261, -90793, 25826, 126873,
    8036, -159701, -61848, 181133, 135492, -181587,
    -225224, 151196, 322998, -81375, -416283, -33313,
    488553, 193230, -520565, -391949, 492428, 615069,
    -386369, -839894, 189964, 1036224, 100522, -1168433,
    -477135, 1198853, 918073, -1092308, -1386869, 821438,
    1833320, -372283, -2196457, -250541, 2409580, 1019854,
    -2407189, -1883846, 2133295, 2766608, -1550394, -3571702,
    648109, 4188943, 549576, -4504192, -1979640, 4411574,
    3538884, -3827156, -5087119, 2702790, 6455061, -1038621,
    -7456857, -1107340, 7906645, 3614054, -7638040, -6297928,
    6524959, 8919718, -4501877, -11198049, 1581435, 12829123,
    2132609, -13511481, -6438871, 12974092, 11039480, -11005541,
    -15549426, 7481826, 19513793, -2390246, -22431566, -4152815,
    23783684, 11891785, -23061874, -20429970, 19793480, 29234714,
    -13555578, -37646079, 3968065, 44881105, 9352841, -50016417,
    -26920887, 51908350, 49690356, -48936840, -79879289, 38181468,
    123614118, -12211008, -202958665, -60690952, 474547769, 935023386,
    841138832, 293470903, -153421452, -164260598, 50062658, 117379396,
    -6188517, -87583862, -17467593, 64273185, 30693473, -44577697,
    -37232355, 27649393, 39007313, -13301134, -37279409, 1552066,
    33035655, 7558482, -27126413, -14054294, 20307291, 18056553,
    -13242233, -19790180, 6492195, 19572510, -501390, -17790659,
    -4412658, 14872408, 8062096, -11254699, -10383602, 7353205,
    11425400, -3535859, -11327699, 102463, 10298509, 2728316,
    -8587146, -4824061, 6457827, 6136170, -4165531, -6690852,
    1935940, 6575073, 49287, -5919286, -1661287, 4878880,
    2826775, -3616193, -3525401, 2284651, 3782680, -1016221,
    -3659778, -87132, 3241591, 957744, -2624528, -1562547,
    1905229, 1899956, -1171187, -1994186, 493921, 1888007,
    75047, -1634925, -505451, 1291702, 787125, -911931,
    -926978, 541173, 944754, -213883, -868248, -47858,
    728622, 234012, -556300, -344989, 377807, 389220,
    -213717, -380345, 77732, 334413, 23235, -267428,
    -88194, 193466, 120696, -123463, -127217, 64689,
    115575, -20807, -93552, -7605, 67879, 22264,
    -43615, -26273, 23928, 23272, -10194, -16726,
    -18965, 2586, 30889, 6926, -42982, -24620,
    51846, 51255, -53042, -85932, 41579, 125571,
    -12694, -164625, -37134, 195150, 109045, -207322,
    -200693, 190471, 305377, -134582, -411613, 32169,
    503360, 119678, -561025, -317354, 563321, 549214,
    -489909, -794826, 324646, 1025295, -59110, -1204871,
    -304027, 1293954, 748290, -1253385, -1241881, 1049747,
    1737834, -661197, -2176186, 83179, 2488340, 666756,
    -2603512, -1545809, 2456888, 2485223, -1998824, -3392574,
    1204185, 4157372, -80708, -4659936, -1324768, 4783114,
    2923325, -4426020, -4585149, 3518575, 6145488, -2035390,
    -7415501, 7368, 8197653, 2470588, -8304718, -5237148,
    7580983, 8068447, -5923831, -10688785, 3303608, 12787977,
    220324, -14044524, -4489304, 14153082, 9242369, -12854171,
    -14121391, 9963642, 18684404, -5399323, -22426143, -797626,
    24803734, 8448599, -25264234, -17231751, 23269145, 26684260,
    -18308817, -36210265, 9895397, 45088498, 2486523, -52466266,
    -19517306, 57307873, 42387450, -58208575, -73729984, 52765881,
    120672637, -35053381, -209088298, -20577390, 534345370, 954507709,
    799294640, 234734992, -174634038, -145983165, 67595614, 110715550,
    -20218425, -86564920, -6496789, 66460720, 22473112, -48601841,
    -31494783, 32595469, 35474085, -18506475, -35643428, 6527481,
    32961841, 3163121, -28262283, -10468545, 22298413, 15403172,
    -15749198, -18098822, 9206721, 18795020, -3159820, -17818120,
    -2019631, 15553341, 6084111, -12413395, -8909870, 8807072,
    10488211, -5110726, -10909540, 1644965, 10341885, 1341822,
    -9006031, -3682325, 7149639, 5291527, -5022597, -6160970,
    2855572, 6347378, -843234, -5957282, -866955, 5129540,
    2180089, -4017589, -3053628, 2773105, 3492433, -1532393,
    -3540189, 406386, 3268559, 525317, -2765451, -1216403,
    2123690, 1652243, -1431141, -1845431, 763061, 1829409,
    -177061, -1651123, -289217, 1363659, 617942, -1019604,
    -808908, 665743, 875915, -339385, -842357, 66448,
    736667, 138830, -588137, -272839, 423517, 340566,
    -264623, -353032, 127038, 324590, -19819, -270442,
    -53947, 204624, 96001, -138602, -111446, 80531,
    107207, -35105, -90648, 3902, 68468, 13943,
    -45979, -20915, 26762, 20276, -12663, -15345,
    -18550, 6217, 31395, 1612, -45434, -17832,
    57459, 43753, -63029, -79144, 56888, 121625,
    -33676, -166254, -11076, 205442, 79765, -229317,
    -171511, 226603, 281111, -186031, -398373, 98184,
    508066, 42378, -590633, -234982, 623795, 471008,
    -585019, -732731, 454714, 993150, -219879, -1217108,
    -122217, 1363843, 560818, -1390947, -1069494, 1259545,
    1605490, -940260, -2111072, 419350, 2517100, 295721,
    -2748875, -1172124, 2733965, 2149717, -2411464, -3141996,
    1741832, 4040391, -716239, -4722041, -635769, 5060777,
    2241488, -4940637, -3984211, 4270819, 5707098, -3000679,
    -7222131, 1133127, 8324003, 1265238, -8808267, -4058837,
    8492489, 7043895, -7238718, -9956070, 4975231, 12485093,
    -1715382, -14295850, -2428543, 15054672, 7238207, -14458948,
    -12390037, 12267671, 17464351, -8330277, -21962203, 2611136,
    25328193, 4792652, -26976134, -13641790, 26312774, 23554244,
    -22752193, -34012551, 15708735, 44375271, -4545705, -53883735,
    -11570698, 61642963, 34045487, -66518265, -65882984, 66744692,
    115113503, -58278126, -211223090, 23716653, 592744043, 967630836,
    752961867, 177845609, -190926768, -125772472, 83051042, 102072097,
    -33423425, -83836145, 4345989, 67264787, 13961719, -51573705,
    -25219834, 36805129, 31278543, -23263379, -33310284, 11305352,
    32223089, -1242035, -28813409, -6712882, 23816155, 12467798,
    -17910416, -16059520, 11706474, 17645425, -5727080, -17484838,
    390207, 15912801, 4002618, -13309496, -7270307, 10068501,
    9347926, -6566815, -10274677, 3139139, 10175540, -58267,
    -9238541, -2477301, 7689917, 4348172, -5769462, -5511713,
    3708128, 5993534, -1709555, -5874322, -63333, 5273762,
    1496122, -4333395, -2525141, 3200126, 3134700, -2011823,
    -3350303, 886077, 3229077, 87285, -2848759, -849768,
    2296545, 1374126, -1658920, -1661205, 1013337, 1734554,
    -422284, -1633701, -70050, 1407041, 438612, -1105127,
    -676172, 775022, 790381, -456120, -799825, 177616,
    729681, 42392, -607546, -196395, 459865, 285885,
    -309253, -319083, 172837, 308390, -61613, -267921,
    -19329, 211397, 69914, -150586, -93792, 94351,
    96881, -48310, -85986, 14997, 67648, 5606,
    -47325, -15325, 28938, 16992, -14755, -13717,
    -17710, 9881, 31252, -3942, -47016, -10438,
    62046, 35107, -71991, -70518, 71422, 115051,
    -54477, -164475, 15814, 211714, 48198, -247039,
    -138186, 258784, 250571, -234627, -376677, 163379,
    502395, -37141, -608595, -146399, 672435, 381864,
    -669608, -654622, 577421, 940133, -378495, -1204545,
    64685, 1406732, 359264, -1501850, -872879, 1446285,
    1438528, -1203623, -2001885, 751112, 2494657, -85866,
    -2839689, -770026, 2958308, 1766338, -2779456, -2824292,
    2249837, 3839449, -1344065, -4688221, 73625, 5237883,
    1506625, -5359597, -3295570, 4943483, 5147542, -3914426,
    -6879165, 2247031, 8281465, 22028, -9136777, -2785919,
    9239420, 5865293, -8418611, -9012679, 6561648, 11924079,
    -3635188, -14257527, -297581, 15657658, 5065843, -15784604,
    -10387604, 14344997, 15874425, -11122407, -21044222, 6004449,
    25340722, 996129, -28156760, -9728576, 28856741, 19900942,
    -26790762, -31086906, 21287731, 42741409, -11603191, -54221402,
    -3232509, 64803017, 24810179, -73672536, -56447913, 79815854,
    106943589, -81446897, -209063029, 71838145, 649076609, 974232708,
    702691484, 123371954, -202360741, -104101825, 96220048, 91685164,
    -45569038, -79496197, 14848528, 66698825, 5334984, -53452878,
    -18542415, 40205595, 26515002, -27482590, -30336519, 15792030,
    30842739, -5568027, -28775645, -2865080, 24835238, 9312841,
    -19685986, -13717195, 13943190, 16150823, -8152200, -16801210,
    2767953, 15946721, 1860747, -13927461, -5499711, 11113849,
    8029600, -7875818, -9438068, 4555214, 9804886, -1443478,
    -9281795, -1234001, 8069222, 3326184, -6392107, -4757424,
    4477025, 5521988, -2532405, -5673331, 733211, 5309740,
    789114, -4558132, -1951250, 3557735, 2717467, -2445210,
    -3094755, 1342386, 3124706, -347417, -2873441, -470310,
    2420844, 1071607, -1850309, -1445683, 1239922, 1605831,
    -655749, -1583459, 147573, 1421362, 252910, -1167081,
    -531669, 867022, 690133, -561857, -741770, 283441,
    708046, -53327, -614341, -117280, 486279, 226392,
    -346815, -279310, 214267, 286267, -101323, -260030,
    14949, 213745, 42997, -159243, -74662, 105917,
    84856, -60183, -79709, 25464, 65479, -2575,
    -47662, -9627, 30436, 13499, -16443, -11890,
];

pub static SRC_INT32_16_7_4082_5000: StageDescriptor = StageDescriptor {
    name: "int32_16_7_4082_5000",
    input_stride: 3,
    output_stride: 7,
    subfilter_count: 16,
    subfilter_length: 56,
    block_in: 7,
    block_out: 16,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_16_7_4082_5000_FIR),
};

static SRC_INT32_16_7_4082_5000_FIR: [i32; 896] = [
    -64360, 167195, -315093, 480931, -604258, 587879,
    -303344, -392028, 1625848, -3471002, 5900501, -8744447,
    11658401, -14112645, 15410076, -14736800, 11244254, -4155676,
    -7116079, 22856882, -42965860, 66916377, -93783218, 122359356,
    -151412182, 180262010, -210648885, 258987629, 1947752593, 130540181,
    -154654898, 151289752, -137376969, 117722859, -95179396, 71971897,
    -49906965, 30361608, -14246742, 2000666, 6373284, -11228568,
    13169494, -12934188, 11283234, -8907804, 6366216, -4052197,
    2192755, -869458, 54471, 347774, -461279, 407263,
    -283942, 157500, -63924, 171754, -337688, 543033,
    -735090, 820644, -667669, 118569, 983355, -2755052,
    5226392, -8291282, 11666441, -14867906, 17214313, -17862902,
    15879214, -10335279, 424462, 14424911, -34460098, 59566469,
    -89318712, 123185400, -161056246, 204714972, -263520534, 396502109,
    1927090810, 12995030, -97359623, 118877377, -119538977, 109536260,
    -93548314, 74634031, -55104510, 36725841, -20753072, 7940307,
    1425922, -7458926, 10575171, -11381763, 10563715, -8785267,
    6615711, -4484977, 2668942, -1299895, 394659, 108366,
    -311407, 325129, -245876, 143456, -60795, 170519,
    -350275, 590678, -848643, 1037878, -1026662, 646819,
    283501, -1922949, 4358835, -7553761, 11295871, -15163096,
    18511486, -20495312, 20122029, -16339021, 8141790, 5314207,
    -24623511, 50097459, -81841836, 120053824, -165837905, 223659830,
    -311422167, 540996114, 1886163562, -92099322, -40513105, 84159707,
    -98582048, 98161750, -89024160, 74881200, -58438763, 41777439,
    -26445554, 13481458, -3439860, -3553696, 7718660, -9515049,
    9532859, -8389700, 6648284, -4760888, 3042739, -1671574,
    707159, -122717, -159840, 237721, -202657, 125938,
    -54760, 162999, -351657, 621300, -940095, 1231509,
    -1368123, 1175971, -452881, -997794, 3319632, -6546821,
    10547228, -14975263, 19245397, -22535500, 23825209, -21968397,
    15791235, -4198572, -13738744, 38757320, -71506520, 112938779,
    -165421810, 236231584, -352526023, 690171062, 1825754400, -183508265,
    14246741, 48292192, -75261702, 84049241, -81827562, 72767936,
    -59851448, 45389774, -31164972, 18459428, -8072692, 360322,
    4697313, -7401978, 8232566, -7742227, 6470153, -4876765,
    3306183, -1975090, 983242, -338487, -11555, 148214,
    -156097, 105872, -45714, 148897, -340955, 632768,
    -1005115, 1393861, -1679886, 1688551, -1202944, -6591,
    2136965, -5294698, 9433405, -14296526, 19376598, -23901516,
    26854910, -27031957, 23124164, -13816834, -2129425, 25860705,
    -58562519, 101940323, -159623781, 241720171, -385071781, 841564186,
    1747016145, -260330254, 65431024, 12416576, -50379977, 67719978,
    -72256419, 68421244, -59346056, 47484599, -34786683, 22731401,
    -12332424, 4159385, 1611038, -5116349, 6712024, -6871300,
    6094023, -4834653, 3455135, -2203601, 1215737, -532787,
    128849, 59655, -107995, 84197, -33667, 128145,
    -317662, 623488, -1040042, 1517939, -1950235, 2166908,
    -1942511, 1020511, 844675, -3830423, 7979609, -13134765,
    18884142, -24531097, 29095630, -31351682, 29895903, -23233099,
    9849187, 11780647, -43350191, 87285201, -148421987, 239598362,
    -407413852, 992600055, 1651444533, -322007709, 111731688, -22371790,
    -24759679, 49748445, -60674579, 62034786, -56986207, 48033331,
    -37223706, 26180402, -16094274, 7726648, -1440936, -2735318,
    5025930, -5811567, 5538467, -4641550, 3489267, -2352950,
    1399194, -700460, 257280, -25124, -60070, 61828,
    -18763, 100921, -281689, 592492, -1042044, 1597701,
    -2168317, 2593808, -2646828, 2051103, -518662, -2195023,
    6222905, -11513815, 17766774, -24384210, 30454428, -34769082,
    35873737, -32138632, 21820791, -3061815, -26292245, 69323703,
    -131963555, 229545499, -418067197, 1140645518, 1540844086, -368329480,
    152047550, -55054143, 781182, 30743153, -47498783, 53861140,
    -52892169, 47056732, -38428529, 28718345, -19252379, 10955684,
    -4363191, -336850, 3232583, -4602567, 4827136, -4309016,
    3411926, -2421683, 1529984, -837460, 370262, -103595,
    -13914, 39626, -1280, 67660, -233394, 539509,
    -1009265, 1628304, -2324548, 2953016, -3291363, 3051505,
    -1910845, -436419, 4211355, -9473151, 16043511, -23444944,
    30864516, -37150819, 40844722, -40233348, 33399589, -18209818,
    -7882666, 48522560, -110566281, 211466301, -415750426, 1283066764,
    1417287104, -399425005, 185504040, -84715227, 25454002, 11326931,
    -33184313, 44202424, -47235692, 44623052, -38393649, 30288099,
    -21722664, 13753577, -7067039, 2002779, 1391925, -3287320,
    3987838, -3852632, 3229890, -2410988, 1606334, -940936,
    465014, -173599, 29062, 18366, 18366, 29062,
    -173599, 465014, -940936, 1606334, -2410988, 3229890,
    -3852632, 3987838, -3287320, 1391925, 2002779, -7067039,
    13753577, -21722664, 30288099, -38393649, 44623052, -47235692,
    44202424, -33184313, 11326931, 25454002, -84715227, 185504040,
    -399425005, 1417287104, 1283066764, -415750426, 211466301, -110566281,
    48522560, -7882666, -18209818, 33399589, -40233348, 40844722,
    -37150819, 30864516, -23444944, 16043511, -9473151, 4211355,
    -436419, -1910845, 3051505, -3291363, 2953016, -2324548,
    1628304, -1009265, 539509, -233394, 67660, -1280,
    39626, -13914, -103595, 370262, -837460, 1529984,
    -2421683, 3411926, -4309016, 4827136, -4602567, 3232583,
    -336850, -4363191, 10955684, -19252379, 28718345, -38428529,
    47056732, -52892169, 53861140, -47498783, 30743153, 781182,
    -55054143, 152047550, -368329480, 1540844086, 1140645518, -418067197,
    229545499, -131963555, 69323703, -26292245, -3061815, 21820791,
    -32138632, 35873737, -34769082, 30454428, -24384210, 17766774,
    -11513815, 6222905, -2195023, -518662, 2051103, -2646828,
    2593808, -2168317, 1597701, -1042044, 592492, -281689,
    100921, -18763, 61828, -60070, -25124, 257280,
    -700460, 1399194, -2352950, 3489267, -4641550, 5538467,
    -5811567, 5025930, -2735318, -1440936, 7726648, -16094274,
    26180402, -37223706, 48033331, -56986207, 62034786, -60674579,
    49748445, -24759679, -22371790, 111731688, -322007709, 1651444533,
    992600055, -407413852, 239598362, -148421987, 87285201, -43350191,
    11780647, 9849187, -23233099, 29895903, -31351682, 29095630,
    -24531097, 18884142, -13134765, 7979609, -3830423, 844675,
    1020511, -1942511, 2166908, -1950235, 1517939, -1040042,
    623488, -317662, 128145, -33667, 84197, -107995,
    59655, 128849, -532787, 1215737, -2203601, 3455135,
    -4834653, 6094023, -6871300, 6712024, -5116349, 1611038,
    4159385, -12332424, 22731401, -34786683, 47484599, -59346056,
    68421244, -72256419, 67719978, -50379977, 12416576, 65431024,
    -260330254, 1747016145, 841564186, -385071781, 241720171, -159623781,
    101940323, -58562519, 25860705, -2129425, -13816834, 23124164,
    -27031957, 26854910, -23901516, 19376598, -14296526, 9433405,
    -5294698, 2136965, -6591, -1202944, 1688551, -1679886,
    1393861, -1005115, 632768, -340955, 148897, -45714,
    105872, -156097, 148214, -11555, -338487, 983242,
    -1975090, 3306183, -4876765, 6470153, -7742227, 8232566,
    -7401978, 4697313, 360322, -8072692, 18459428, -31164972,
    45389774, -59851448, 72767936, -81827562, 84049241, -75261702,
    48292192, 14246741, -183508265, 1825754400, 690171062, -352526023,
    236231584, -165421810, 112938779, -71506520, 38757320, -13738744,
    -4198572, 15791235, -21968397, 23825209, -22535500, 19245397,
    -14975263, 10547228, -6546821, 3319632, -997794, -452881,
    1175971, -1368123, 1231509, -940095, 621300, -351657,
    162999, -54760, 125938, -202657, 237721, -159840,
    -122717, 707159, -1671574, 3042739, -4760888, 6648284,
    -8389700, 9532859, -9515049, 7718660, -3553696, -3439860,
    13481458, -26445554, 41777439, -58438763, 74881200, -89024160,
    98161750, -98582048, 84159707, -40513105, -92099322, 1886163562,
    540996114, -311422167, 223659830, -165837905, 120053824, -81841836,
    50097459, -24623511, 5314207, 8141790, -16339021, 20122029,
    -20495312, 18511486, -15163096, 11295871, -7553761, 4358835,
    -1922949, 283501, 646819, -1026662, 1037878, -848643,
    590678, -350275, 170519, -60795, 143456, -245876,
    325129, -311407, 108366, 394659, -1299895, 2668942,
    -4484977, 6615711, -8785267, 10563715, -11381763, 10575171,
    -7458926, 1425922, 7940307, -20753072, 36725841, -55104510,
    74634031, -93548314, 109536260, -119538977, 118877377, -97359623,
    12995030, 1927090810, 396502109, -263520534, 204714972, -161056246,
    123185400, -89318712, 59566469, -34460098, 14424911, 424462,
    -10335279, 15879214, -17862902, 17214313, -14867906, 11666441,
    -8291282, 5226392, -2755052, 983355, 118569, -667669,
    820644, -735090, 543033, -337688, 171754, -63924,
    157500, -283942, 407263, -461279, 347774, 54471,
    -869458, 2192755, -4052197, 6366216, -8907804, 11283234,
    -12934188, 13169494, -11228568, 6373284, 2000666, -14246742,
    30361608, -49906965, 71971897, -95179396, 117722859, -137376969,
    151289752, -154654898, 130540181, 1947752593, 258987629, -210648885,
    180262010, -151412182, 122359356, -93783218, 66916377, -42965860,
    22856882, -7116079, -4155676, 11244254, -14736800, 15410076,
    -14112645, 11658401, -8744447, 5900501, -3471002, 1625848,
    -392028, -303344, 587879, -604258, 480931, -315093,
    167195, -64360,
];

pub static SRC_INT32_20_7_2976_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_7_2976_5000",
    input_stride: 1,
    output_stride: 3,
    subfilter_count: 20,
    subfilter_length: 28,
    block_in: 7,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_7_2976_5000_FIR),
};

static SRC_INT32_20_7_2976_5000_FIR: [i32; 560] = [
    -61291, 587525, -1808705, 2842925, -1088924, -6718375,
    21221136, -36405709, 38175095, -8535744, -64907241, 179043213,
    -312677954, 442890630, 1711692902, 354626944, -292278593, 182938448,
    -76499922, 2083236, 31944383, -34434636, 21760789, -7991348,
    -97863, 2369605, -1681179, 584360, -50521, 578386,
    -1913707, 3300704, -2123985, -5260525, 20298697, -37860911,
    44038802, -19447206, -51771591, 172038617, -329153980, 533590255,
    1702589217, 269494616, -268471033, 183800750, -86429817, 12253463,
    25460665, -32001481, 21926823, -9068163, 835222, 1889954,
    -1535294, 570243, -35436, 555729, -1992126, 3733372,
    -3187421, -3632934, 18990446, -38752801, 49422902, -30483816,
    -37242510, 161893154, -341217708, 625988377, 1684471014, 188139920,
    -241789302, 181748568, -94607551, 21831779, 18837448, -29165235,
    21734116, -9941392, 1698152, 1412679, -1375232, 546631,
    -15812, 518531, -2040101, 4131166, -4262148, -1854527,
    17299845, -39041373, 54218132, -41469491, -21498048, 148622584,
    -348413491, 719313269, 1657515562, 111153570, -212778977, 176938978,
    -100974414, 30689906, 12185939, -25988915, 21202751, -10607391,
    2480658, 945864, -1205109, 515041, 8465, 465990,
    -2054060, 4484294, -5329851, 52123, 15237085, -38695058,
    58320530, -52221940, -4743055, 132291673, -350325881, 812767181,
    1621986123, 39065065, -181989900, 169563859, -105502110, 38715916,
    5613343, -22538358, 20357441, -11066171, 3174449, 496860,
    -1028904, 477013, 37390, 397574, -2030822, 4783126,
    -6371247, 2061004, 12819230, -37691621, 61633387, -62555403,
    12793012, 113015291, -346586169, 905535020, 1578228820, -27662112,
    -149969035, 159845700, -108192048, 45815388, -778712, -18881021,
    19226905, -11321211, 3773245, 72200, -850389, 434077,
    70822, 313049, -1967686, 5018390, -7366380, 4142949,
    10070235, -36018943, 64069149, -72283550, 30858751, 90958816,
    -336878471, 996793355, 1526668524, -88634420, -117253569, 148033122,
    -109074202, 51912235, -6895590, -15084814, 17843206, -11379221,
    4272769, -322465, -673073, 387714, 108478, 212519,
    -1862527, 5181365, -8294947, 6265990, 7020859, -33675659,
    65551254, -81222505, 49183920, 66337839, -320945289, 1085719619,
    1467803821, -143531257, -84364336, 134396171, -108205568, 56949223,
    -12650900, -11216959, 16241058, -11249860, 4670707, -682414,
    -500153, 339332, 149920, 96450, -1713879, 5264089,
    -9136647, 8395781, 3708443, -30671637, 66015838, -89193938,
    67482952, 39417140, -298592435, 1171501393, 1402201115, -192107007,
    -51799655, 119221479, -105668269, 60888159, -17967568, -7342919,
    14457125, -10945422, 4966634, -1003874, -334473, 290241,
    194555, -34308, -1521019, 5259557, -9871553, 10496085,
    176572, -27028291, 65413318, -96028180, 85458841, 10508927,
    -269693262, 1253345670, 1330487956, -234192126, -20029641, 102807348,
    -101567329, 63709777, -22778705, -3525398, 12529314, -10480488,
    5161912, -1284032, -178503, 241631, 241631, -178503,
    -1284032, 5161912, -10480488, 12529314, -3525398, -22778705,
    63709777, -101567329, 102807348, -20029641, -234192126, 1330487956,
    1253345670, -269693262, 10508927, 85458841, -96028180, 65413318,
    -27028291, 176572, 10496085, -9871553, 5259557, -1521019,
    -34308, 194555, 290241, -334473, -1003874, 4966634,
    -10945422, 14457125, -7342919, -17967568, 60888159, -105668269,
    119221479, -51799655, -192107007, 1402201115, 1171501393, -298592435,
    39417140, 67482952, -89193938, 66015838, -30671637, 3708443,
    8395781, -9136647, 5264089, -1713879, 96450, 149920,
    339332, -500153, -682414, 4670707, -11249860, 16241058,
    -11216959, -12650900, 56949223, -108205568, 134396171, -84364336,
    -143531257, 1467803821, 1085719619, -320945289, 66337839, 49183920,
    -81222505, 65551254, -33675659, 7020859, 6265990, -8294947,
    5181365, -1862527, 212519, 108478, 387714, -673073,
    -322465, 4272769, -11379221, 17843206, -15084814, -6895590,
    51912235, -109074202, 148033122, -117253569, -88634420, 1526668524,
    996793355, -336878471, 90958816, 30858751, -72283550, 64069149,
    -36018943, 10070235, 4142949, -7366380, 5018390, -1967686,
    313049, 70822, 434077, -850389, 72200, 3773245,
    -11321211, 19226905, -18881021, -778712, 45815388, -108192048,
    159845700, -149969035, -27662112, 1578228820, 905535020, -346586169,
    113015291, 12793012, -62555403, 61633387, -37691621, 12819230,
    2061004, -6371247, 4783126, -2030822, 397574, 37390,
    477013, -1028904, 496860, 3174449, -11066171, 20357441,
    -22538358, 5613343, 38715916, -105502110, 169563859, -181989900,
    39065065, 1621986123, 812767181, -350325881, 132291673, -4743055,
    -52221940, 58320530, -38695058, 15237085, 52123, -5329851,
    4484294, -2054060, 465990, 8465, 515041, -1205109,
    945864, 2480658, -10607391, 21202751, -25988915, 12185939,
    30689906, -100974414, 176938978, -212778977, 111153570, 1657515562,
    719313269, -348413491, 148622584, -21498048, -41469491, 54218132,
    -39041373, 17299845, -1854527, -4262148, 4131166, -2040101,
    518531, -15812, 546631, -1375232, 1412679, 1698152,
    -9941392, 21734116, -29165235, 18837448, 21831779, -94607551,
    181748568, -241789302, 188139920, 1684471014, 625988377, -341217708,
    161893154, -37242510, -30483816, 49422902, -38752801, 18990446,
    -3632934, -3187421, 3733372, -1992126, 555729, -35436,
    570243, -1535294, 1889954, 835222, -9068163, 21926823,
    -32001481, 25460665, 12253463, -86429817, 183800750, -268471033,
    269494616, 1702589217, 533590255, -329153980, 172038617, -51771591,
    -19447206, 44038802, -37860911, 20298697, -5260525, -2123985,
    3300704, -1913707, 578386, -50521, 584360, -1681179,
    2369605, -97863, -7991348, 21760789, -34434636, 31944383,
    2083236, -76499922, 182938448, -292278593, 354626944, 1711692902,
    442890630, -312677954, 179043213, -64907241, -8535744, 38175095,
    -36405709, 21221136, -6718375, -1088924, 2842925, -1808705,
    587525, -61291,
];

pub static SRC_INT32_20_21_1250_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_21_1250_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 20,
    subfilter_length: 16,
    block_in: 21,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_21_1250_5000_FIR),
};

static SRC_INT32_20_21_1250_5000_FIR: [i32; 320] = [
    179621, 1192032, -10026776, 3443187, 59813391, -89632698,
    -144571840, 642738735, 1277752721, 590570263, -159878791, -76948889,
    59696819, 760667, -9258828, 1290458, 234234, 1053580,
    -10752072, 6341893, 59287416, -102306648, -126623211, 694636289,
    1273666789, 538415125, -172595095, -64379371, 58985063, -1693387,
    -8462383, 1352556, 296848, 871647, -11419719, 9440735,
    58075376, -114838399, -105999613, 745974574, 1265521084, 486551404,
    -182788493, -52039389, 57728582, -3910334, -7650636, 1382174,
    367230, 643102, -12014017, 12719802, 56138365, -127088223,
    -82686388, 796463290, 1253367701, 435249010, -190542292, -40034708,
    55980183, -5885007, -6835731, 1383241, 444909, 365232,
    -12518726, 16155270, 53442835, -138909942, -56688269, 845812376,
    1237284245, 384767796, -195954125, -28461140, 53794295, -7615509,
    -6028684, 1359686, 529152, 35840, -12917252, 19719402,
    49961340, -150151950, -28029988, 893734228, 1217373183, 335355771,
    -199134611, -17404198, 51226269, -9103000, -5239333, 1315380,
    618946, -346668, -13192844, 23380596, 45673243, -160658349,
    3243288, 939945926, 1193760993, 287247464, -200205957, -6938859,
    48331709, -10351441, -4476312, 1254071, 712983, -783185,
    -13328826, 27103482, 40565406, -170270162, 37065682, 984171443,
    1166597122, 240662417, -199300490, 2870552, 45165841, -11367335,
    -3747032, 1179339, 809647, -1273810, -13308829, 30849078,
    34632821, -178826640, 73350513, 1026143825, 1136052753, 195803840,
    -196559161, 11970371, 41782928, -12159453, -3057697, 1094551,
    907008, -1817768, -13117056, 34574999, 27879199, -186166631,
    111990379, 1065607314, 1102319394, 152857434, -192130009, 20317497,
    38235726, -12738546, -2413320, 1002826, 1002826, -2413320,
    -12738546, 38235726, 20317497, -192130009, 152857434, 1102319394,
    1065607314, 111990379, -186166631, 27879199, 34574999, -13117056,
    -1817768, 907008, 1094551, -3057697, -12159453, 41782928,
    11970371, -196559161, 195803840, 1136052753, 1026143825, 73350513,
    -178826640, 34632821, 30849078, -13308829, -1273810, 809647,
    1179339, -3747032, -11367335, 45165841, 2870552, -199300490,
    240662417, 1166597122, 984171443, 37065682, -170270162, 40565406,
    27103482, -13328826, -783185, 712983, 1254071, -4476312,
    -10351441, 48331709, -6938859, -200205957, 287247464, 1193760993,
    939945926, 3243288, -160658349, 45673243, 23380596, -13192844,
    -346668, 618946, 1315380, -5239333, -9103000, 51226269,
    -17404198, -199134611, 335355771, 1217373183, 893734228, -28029988,
    -150151950, 49961340, 19719402, -12917252, 35840, 529152,
    1359686, -6028684, -7615509, 53794295, -28461140, -195954125,
    384767796, 1237284245, 845812376, -56688269, -138909942, 53442835,
    16155270, -12518726, 365232, 444909, 1383241, -6835731,
    -5885007, 55980183, -40034708, -190542292, 435249010, 1253367701,
    796463290, -82686388, -127088223, 56138365, 12719802, -12014017,
    643102, 367230, 1382174, -7650636, -3910334, 57728582,
    -52039389, -182788493, 486551404, 1265521084, 745974574, -105999613,
    -114838399, 58075376, 9440735, -11419719, 871647, 296848,
    1352556, -8462383, -1693387, 58985063, -64379371, -172595095,
    538415125, 1273666789, 694636289, -126623211, -102306648, 59287416,
    6341893, -10752072, 1053580, 234234, 1290458, -9258828,
    760667, 59696819, -76948889, -159878791, 590570263, 1277752721,
    642738735, -144571840, -89632698, 59813391, 3443187, -10026776,
    1192032, 179621,
];

pub static SRC_INT32_20_21_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_21_2500_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 20,
    subfilter_length: 24,
    block_in: 21,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_21_2500_5000_FIR),
};

static SRC_INT32_20_21_2500_5000_FIR: [i32; 480] = [
    160223, -454260, -1090941, 6463211, -11168626, 1415712,
    32365215, -70147447, 55015734, 69943958, -300924782, 558078689,
    1533088012, 484105513, -299565456, 86266983, 42523661, -66756418,
    34498971, -1375624, -9880659, 6378167, -1314062, -336387,
    183822, -579806, -827682, 6458151, -12383516, 4351826,
    29675281, -72755325, 67364703, 51862517, -298337973, 632812818,
    1526467022, 411394996, -294506458, 100712315, 30054647, -62662586,
    36075939, -3992497, -8542002, 6210780, -1497096, -227460,
    206808, -711452, -524930, 6356084, -13502610, 7399257,
    26437643, -74506623, 79398622, 32169970, -291587630, 707789251,
    1513278490, 340427488, -286019933, 113188920, 17767218, -57951851,
    37103005, -6409224, -7174397, 5969492, -1640731, -128457,
    228371, -847332, -184073, 6151137, -14503179, 10521044,
    22668907, -75336160, 90941777, 11041116, -280488589, 782477035,
    1493628781, 271657857, -274400129, 123633882, 5810575, -52714293,
    37594105, -8604268, -5798671, 5663252, -1746236, -40071,
    247630, -985293, 192725, 5838636, -15362833, 13677083,
    18393978, -75188277, 101816826, -11322658, -264890801, 856337735,
    1467676119, 205511664, -259959680, 132011952, -5676907, -47042787,
    37569691, -10560324, -4434483, 5301345, -1815393, 37279,
    263645, -1122908, 602496, 5415262, -16059884, 16824545,
    13646120, -74018033, 111847056, -34694609, -244681918, 928830390,
    1435629013, 142381703, -243025786, 138314793, -16568980, -41031659,
    37056145, -12264332, -3100108, 4893228, -1850424, 103428,
    275436, -1257500, 1041453, 4879205, -16573721, 19918350,
    8466886, -71792315, 120858721, -58824229, -219789529, 999416552,
    1397744190, 82624927, -223936349, 142559940, -26752618, -34775365,
    36085126, -13707440, -1812256, 4448367, -1853922, 158446,
    281999, -1386172, 1504992, 4230290, -16885183, 22911714,
    2905945, -68490826, 128683439, -83439148, -190183024, 1067565343,
    1354324052, 26559782, -203036089, 144789489, -36128902, -28367233,
    34692889, -14884900, -585916, 3976098, -1828775, 202615,
    282332, -1505838, 1987706, 3470097, -16976945, 25756731,
    -2979231, -64106947, 135160616, -108247373, -155875047, 1132758498,
    1305713690, -25536017, -180672707, 145068546, -44613681, -21898275,
    32919557, -15795912, 565751, 3485484, -1778095, 236400,
    275452, -1613270, 2483411, 2602053, -16833879, 28405018,
    -9123795, -58648445, 140139879, -132939818, -116922526, 1194495316,
    1252297480, -73427257, -157193121, 143483462, -52138022, -15456078,
    30808386, -16443423, 1631502, 2985198, -1705145, 260428,
    260428, -1705145, 2985198, 1631502, -16443423, 30808386,
    -15456078, -52138022, 143483462, -157193121, -73427257, 1252297480,
    1194495316, -116922526, -132939818, 140139879, -58648445, -9123795,
    28405018, -16833879, 2602053, 2483411, -1613270, 275452,
    236400, -1778095, 3485484, 565751, -15795912, 32919557,
    -21898275, -44613681, 145068546, -180672707, -25536017, 1305713690,
    1132758498, -155875047, -108247373, 135160616, -64106947, -2979231,
    25756731, -16976945, 3470097, 1987706, -1505838, 282332,
    202615, -1828775, 3976098, -585916, -14884900, 34692889,
    -28367233, -36128902, 144789489, -203036089, 26559782, 1354324052,
    1067565343, -190183024, -83439148, 128683439, -68490826, 2905945,
    22911714, -16885183, 4230290, 1504992, -1386172, 281999,
    158446, -1853922, 4448367, -1812256, -13707440, 36085126,
    -34775365, -26752618, 142559940, -223936349, 82624927, 1397744190,
    999416552, -219789529, -58824229, 120858721, -71792315, 8466886,
    19918350, -16573721, 4879205, 1041453, -1257500, 275436,
    103428, -1850424, 4893228, -3100108, -12264332, 37056145,
    -41031659, -16568980, 138314793, -243025786, 142381703, 1435629013,
    928830390, -244681918, -34694609, 111847056, -74018033, 13646120,
    16824545, -16059884, 5415262, 602496, -1122908, 263645,
    37279, -1815393, 5301345, -4434483, -10560324, 37569691,
    -47042787, -5676907, 132011952, -259959680, 205511664, 1467676119,
    856337735, -264890801, -11322658, 101816826, -75188277, 18393978,
    13677083, -15362833, 5838636, 192725, -985293, 247630,
    -40071, -1746236, 5663252, -5798671, -8604268, 37594105,
    -52714293, 5810575, 123633882, -274400129, 271657857, 1493628781,
    782477035, -280488589, 11041116, 90941777, -75336160, 22668907,
    10521044, -14503179, 6151137, -184073, -847332, 228371,
    -128457, -1640731, 5969492, -7174397, -6409224, 37103005,
    -57951851, 17767218, 113188920, -286019933, 340427488, 1513278490,
    707789251, -291587630, 32169970, 79398622, -74506623, 26437643,
    7399257, -13502610, 6356084, -524930, -711452, 206808,
    -227460, -1497096, 6210780, -8542002, -3992497, 36075939,
    -62662586, 30054647, 100712315, -294506458, 411394996, 1526467022,
    632812818, -298337973, 51862517, 67364703, -72755325, 29675281,
    4351826, -12383516, 6458151, -827682, -579806, 183822,
    -336387, -1314062, 6378167, -9880659, -1375624, 34498971,
    -66756418, 42523661, 86266983, -299565456, 484105513, 1533088012,
    558078689, -300924782, 69943958, 55015734, -70147447, 32365215,
    1415712, -11168626, 6463211, -1090941, -454260, 160223,
];

pub static SRC_INT32_20_21_3125_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_21_3125_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 20,
    subfilter_length: 32,
    block_in: 21,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_21_3125_5000_FIR),
};

static SRC_INT32_20_21_3125_5000_FIR: [i32; 640] = [
    108780, -475433, 701786, 337693, -3727596, 8651597,
    -10850801, 3740047, 16617439, -44741407, 62368408, -43465144,
    -32274863, 164345716, -325934127, 482125915, 1660705646, 397464277,
    -311208323, 173719082, -47259922, -32255081, 57793607, -45390524,
    19493688, 1093859, -9470882, 8394262, -3989756, 635839,
    544852, -431021, 111999, -515575, 859850, 12971,
    -3389108, 8784333, -12124503, 6440668, 13370534, -43378834,
    66149310, -54409587, -16232913, 152050064, -336489438, 568583355,
    1652418675, 315237602, -292737086, 180156510, -61007595, -20953834,
    52520143, -45341871, 21970024, -1460066, -8010532, 8022453,
    -4175727, 904305, 391622, -383596, 112498, -550162,
    1016245, -334553, -2975437, 8783880, -13266739, 9155444,
    9789194, -41297648, 69049945, -64911882, 662994, 136888434,
    -342479952, 656166040, 1635920572, 236047424, -270970399, 183685598,
    -73361627, -9731267, 46650411, -44621064, 24024343, -3886834,
    -6495642, 7547601, -4286860, 1140677, 244419, -334361,
    109856, -577901, 1167986, -700452, -2489066, 8643405,
    -14253232, 11842193, 5916298, -38503685, 70994457, -74796014,
    18189673, 118960655, -343547719, 744178678, 1611362179, 160451938,
    -246377176, 184373311, -84191407, 1249675, 40292190, -43262914,
    25641769, -6154907, -4951805, 6982195, -4325635, 1343223,
    105284, -284448, 103688, -597522, 1311943, -1079692,
    -1933844, 8358034, -15061117, 14457433, 1800953, -35014076,
    71919029, -83889161, 36106248, 98410391, -339376434, 831908273,
    1578967662, 88960839, -219439188, 182323620, -93392959, 11835123,
    33556860, -41310579, 26814611, -8236460, -3403923, 6339531,
    -4295554, 1510886, -24035, -234896, 93656, -607804,
    1444894, -1466673, -1314998, 7925031, -15669375, 16957019,
    -2502040, -30857380, 71773288, -92024410, 54157052, 75424886,
    -329696342, 918631427, 1539032032, 22030806, -190644985, 177674746,
    -100889526, 21882243, 26557612, -38814620, 27542213, -10107657,
    -1875851, 5633463, -4201036, 1643256, -142097, -186646,
    79482, -607608, 1563574, -1855306, -639119, 7343942,
    -16059258, 19296829, -6932844, -26073553, 70521535, -99043487,
    72074832, 50234118, -314288690, 1003621845, 1491917882, -39938361,
    -160483899, 170596021, -106631750, 31260978, 19407699, -35831977,
    27830703, -11748865, -390063, 4878153, -4047287, 1740542,
    -247771, -140521, 60965, -595903, 1664737, -2239081,
    85877, 6616720, -16214698, 21433473, -11427335, -20713728,
    68143807, -104799435, 89584242, 23109365, -292989672, 1086157954,
    1438051383, -96606889, -129440182, 161284449, -110597451, 39855531,
    12218741, -32424879, 27692645, -13144782, 1032634, 4087832,
    -3840176, 1803524, -340235, -97226, 37988, -571802,
    1745219, -2611159, 850812, 5747807, -16122678, 23325008,
    -15917956, -14839815, 64636721, -109159219, 106405556, -5638814,
    -265693791, 1165530528, 1377917592, -147697438, -97987365, 149960998,
    -112791028, 47565603, 5099105, -28659717, 27146600, -14284505,
    2373357, 3276563, -3586100, 1833510, -418968, -57338,
    10534, -534586, 1802001, -2964476, 1645334, 4744179,
    -15773586, 24931676, -20334655, -8523924, 60014100, -112006209,
    122258580, -35663168, -232356597, 1241050253, 1312055123, -192996762,
    -66582906, 136866696, -113242499, 54307355, -1847601, -24605893,
    26216622, -15161511, 3615355, 2458030, -3291850, 1832274,
    -483738, -21310, -21310, -483738, 1832274, -3291850,
    2458030, 3615355, -15161511, 26216622, -24605893, -1847601,
    54307355, -113242499, 136866696, -66582906, -192996762, 1312055123,
    1241050253, -232356597, -35663168, 122258580, -112006209, 60014100,
    -8523924, -20334655, 24931676, -15773586, 4744179, 1645334,
    -2964476, 1802001, -534586, 10534, -57338, -418968,
    1833510, -3586100, 3276563, 2373357, -14284505, 27146600,
    -28659717, 5099105, 47565603, -112791028, 149960998, -97987365,
    -147697438, 1377917592, 1165530528, -265693791, -5638814, 106405556,
    -109159219, 64636721, -14839815, -15917956, 23325008, -16122678,
    5747807, 850812, -2611159, 1745219, -571802, 37988,
    -97226, -340235, 1803524, -3840176, 4087832, 1032634,
    -13144782, 27692645, -32424879, 12218741, 39855531, -110597451,
    161284449, -129440182, -96606889, 1438051383, 1086157954, -292989672,
    23109365, 89584242, -104799435, 68143807, -20713728, -11427335,
    21433473, -16214698, 6616720, 85877, -2239081, 1664737,
    -595903, 60965, -140521, -247771, 1740542, -4047287,
    4878153, -390063, -11748865, 27830703, -35831977, 19407699,
    31260978, -106631750, 170596021, -160483899, -39938361, 1491917882,
    1003621845, -314288690, 50234118, 72074832, -99043487, 70521535,
    -26073553, -6932844, 19296829, -16059258, 7343942, -639119,
    -1855306, 1563574, -607608, 79482, -186646, -142097,
    1643256, -4201036, 5633463, -1875851, -10107657, 27542213,
    -38814620, 26557612, 21882243, -100889526, 177674746, -190644985,
    22030806, 1539032032, 918631427, -329696342, 75424886, 54157052,
    -92024410, 71773288, -30857380, -2502040, 16957019, -15669375,
    7925031, -1314998, -1466673, 1444894, -607804, 93656,
    -234896, -24035, 1510886, -4295554, 6339531, -3403923,
    -8236460, 26814611, -41310579, 33556860, 11835123, -93392959,
    182323620, -219439188, 88960839, 1578967662, 831908273, -339376434,
    98410391, 36106248, -83889161, 71919029, -35014076, 1800953,
    14457433, -15061117, 8358034, -1933844, -1079692, 1311943,
    -597522, 103688, -284448, 105284, 1343223, -4325635,
    6982195, -4951805, -6154907, 25641769, -43262914, 40292190,
    1249675, -84191407, 184373311, -246377176, 160451938, 1611362179,
    744178678, -343547719, 118960655, 18189673, -74796014, 70994457,
    -38503685, 5916298, 11842193, -14253232, 8643405, -2489066,
    -700452, 1167986, -577901, 109856, -334361, 244419,
    1140677, -4286860, 7547601, -6495642, -3886834, 24024343,
    -44621064, 46650411, -9731267, -73361627, 183685598, -270970399,
    236047424, 1635920572, 656166040, -342479952, 136888434, 662994,
    -64911882, 69049945, -41297648, 9789194, 9155444, -13266739,
    8783880, -2975437, -334553, 1016245, -550162, 112498,
    -383596, 391622, 904305, -4175727, 8022453, -8010532,
    -1460066, 21970024, -45341871, 52520143, -20953834, -61007595,
    180156510, -292737086, 315237602, 1652418675, 568583355, -336489438,
    152050064, -16232913, -54409587, 66149310, -43378834, 13370534,
    6440668, -12124503, 8784333, -3389108, 12971, 859850,
    -515575, 111999, -431021, 544852, 635839, -3989756,
    8394262, -9470882, 1093859, 19493688, -45390524, 57793607,
    -32255081, -47259922, 173719082, -311208323, 397464277, 1660705646,
    482125915, -325934127, 164345716, -32274863, -43465144, 62368408,
    -44741407, 16617439, 3740047, -10850801, 8651597, -3727596,
    337693, 701786, -475433, 108780,
];

pub static SRC_INT32_20_21_4167_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_21_4167_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 20,
    subfilter_length: 64,
    block_in: 21,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_21_4167_5000_FIR),
};

static SRC_INT32_20_21_4167_5000_FIR: [i32; 1280] = [
    -15318, -17624, 123779, -325159, 611416, -920317,
    1128623, -1062526, 533531, 601072, -2362964, 4581528,
    -6851190, 8542072, -8881248, 7107059, -2679318, -4491933,
    13851453, -24094721, 33202780, -38641100, 37713836, -28027225,
    7982680, 22800298, -63233871, 110772975, -161763214, 212261140,
    -260035430, 314815542, 1873382465, 215455489, -221599860, 197572005,
    -160061829, 116464206, -72562275, 33054853, -1314079, -20830665,
    33104222, -36571503, 33247626, -25618256, 16165476, -6981904,
    -472770, 5454508, -7872960, 8126519, -6888609, 4898263,
    -2795737, 1025212, 192922, -833562, 1004610, -875073,
    613287, -346860, 147172, -34128, -24036, 430,
    96539, -295923, 597403, -949262, 1234953, -1278180,
    873894, 153644, -1873543, 4169132, -6681658, 8803395,
    -9741125, 8657421, -4877817, -1869353, 11231153, -22085204,
    32525448, -40012196, 41687773, -34820269, 17300530, 11910585,
    -52502826, 102833788, -160423125, 223414936, -295497382, 418743253,
    1861623376, 121537299, -181000184, 179735176, -155433762, 119854930,
    -80344275, 42495776, -10416917, -13371979, 27956054, -33854160,
    32670148, -26635873, 18135417, -9295085, 1700322, 3732778,
    -6738242, 7567869, -6796208, 5115669, -3165151, 1418701,
    -141502, -596027, 865852, -814984, 603470, -360949,
    166461, -48845, -33073, 19744, 65806, -259388,
    571021, -960724, 1320907, -1475898, 1207396, -309054,
    -1335456, 3666681, -6380214, 8902080, -10433000, 10073879,
    -7026114, 838287, 8348918, -19619265, 31217337, -40646429,
    44939272, -41073528, 26463039, 579676, -40542356, 92742529,
    -155979888, 230695884, -327185268, 526286487, 1838238558, 33847201,
    -139042825, 159180264, -148043487, 120935900, -86467595, 50963080,
    -19159748, -5794958, 22374828, -30551062, 31491974, -27137463,
    19730605, -11391426, 3799878, 1975521, -5500994, 6879703,
    -6578673, 5232037, -3465863, 1774953, -463608, -354674,
    715475, -741739, 582628, -367504, 181485, -61589,
    -42236, 39982, 32024, -215948, 532280, -953821,
    1384106, -1651261, 1527361, -778488, -757830, 3081655,
    -5949604, 8832660, -10940093, 11326642, -9082195, 3580917,
    5254899, -16735692, 29292193, -40518781, 47393769, -46658523,
    35293441, -10986326, -27552500, 80637647, -148427506, 233824154,
    -354320019, 636426446, 1803492931, -46925228, -96519309, 136370229,
    -138100944, 119740357, -90852866, 58317877, -27386188, 1756931,
    16472300, -26734076, 29745598, -27122760, 20927942, -13235686,
    5787965, 216392, -4186553, 6077748, -6242939, 5247608,
    -3693959, 2088261, -767675, -114185, 556720, -657215,
    551611, -366744, 192177, -72227, -51313, 60769,
    -4272, -166159, 481442, -928005, 1422536, -1800150,
    1827184, -1245762, -150792, 2423310, -5395128, 8592779,
    -11248821, 12388459, -11004998, 6306864, 2004206, -13481929,
    26775751, -39618281, 48990518, -51457142, 43617970, -22572827,
    -13756952, 66698597, -137817297, 232584398, -376156227, 748090016,
    1757779376, -120194278, -54194957, 111792438, -125856628, 116342482,
    -93454415, 64444541, -34952286, 9143206, 10364292, -22483441,
    27473584, -26601174, 21712209, -14798011, 7629468, -1511590,
    -2821181, 5179532, -5798013, 5164513, -3846999, 2353888,
    -1048488, 120918, 392881, -563440, 511430, -359026,
    198560, -80681, -60078, 81689, -42468, -110731,
    419023, -883086, 1434606, -1918836, 2100463, -1701779,
    474700, 1702542, -4724591, 8183309, -11349123, 13235191,
    -12755214, 8963800, -1344055, -9913324, 23705462, -37948465,
    49683995, -55364062, 51269194, -33960606, 600631, 51143483,
    -124258551, 226831667, -391994202, 860163021, 1701613429, -185483754,
    -12798274, 85949574, -111596087, 110855131, -94260423, 69252410,
    -41728971, 16228934, 4168462, -17886116, 24727593, -25591443,
    22076204, -16054387, 9292700, -3176652, -1431550, 4204012,
    -5254750, 4986698, -3924020, 2568123, -1301424, 346357,
    227238, -462544, 463235, -344824, 200746, -86923,
    -68293, 102301, -81878, -50524, 345790, -819243,
    1419190, -2004066, 2341124, -2137415, 1107055, 931715,
    -3948213, 7608399, -11234727, 13846336, -14296081, 11499740,
    -4727840, -6092214, 20129977, -35527557, 49445022, -58288969,
    58089295, -44929851, 15260758, 34225947, -107918163, 216496320,
    -401191635, 971504202, 1635626313, -242431007, 26988856, 59350539,
    -95633937, 103426925, -93292466, 72676995, -47604183, 22887148,
    -1997927, -13034044, 21567259, -24121120, 22020734, -16986990,
    10749931, -4748834, -44236, 3171188, -4625612, 4719797,
    -3925522, 2728333, -1522520, 558173, 62996, -356716,
    408284, -324720, 198921, -90976, -75717, 122142,
    -121752, 13468, 262760, -737039, 1375667, -2053143,
    2543559, -2543695, 1734253, 124456, -3078484, 6875470,
    -10903350, 14205493, -15594129, 13864038, -8083298, -2086862,
    16108423, -32388385, 48261617, -60158543, 63933230, -55264279,
    29952610, 16231330, -89019232, 201587838, -403174649, 1080959715,
    1560556427, -290789301, 64539995, 32501504, -78307500, 94238763,
    -90604447, 74680681, -52484649, 29001075, -8020186, -8022342,
    18058931, -22225897, 21554458, -17584401, 11977832, -6200522,
    1314784, 2101702, -3924393, 4370990, -3853416, 2832975,
    -1708537, 752786, -96777, -248159, 347913, -299385,
    193349, -92906, -82109, 140738, -161296, 80128,
    171188, -637424, 1303949, -2063992, 2702741, -2911975,
    2344069, -704581, -2129980, 5995139, -10356826, 14300765,
    -16619890, 16008382, -11345957, 2029744, 11709462, -28578008,
    46139515, -60918146, 68671703, -64755276, 44398864, -2527833,
    -67838631, 182197434, -397448090, 1187377964, 1477239419, -330428515,
    99291913, 5897249, -59970207, 83499815, -86280960, 75252923,
    -56297281, 34466131, -13788299, -2947471, 14274319, -19948794,
    20693576, -17841704, 12957832, -7506921, 2620609, 1016434,
    -3165927, 3948828, -3710958, 2881601, -1856992, 927059,
    -249202, -139045, 283511, -269563, 184349, -92823,
    -87235, 157612, -199678, 148235, 72551, -521725,
    1204498, -2035226, 2814342, -3234113, 2924308, -1539967,
    -1119120, 4981087, -9601152, 14125069, -17348539, 17887764,
    -14451945, 6181193, 7010143, -24157073, 43102378, -60533194,
    72193902, -73205962, 58320726, -21716922, -44703550, 158499405,
    -383604864, 1289624524, 1386596978, -361334173, 130751161, -19987061,
    -40984867, 71443102, -80435130, 74409937, -58990175, 39191659,
    -19198897, 2094592, 10289050, -17339222, 19461397, -17760457,
    13676373, -8646464, 3849859, -63897, -2365786, 3463037,
    -3502647, 2874838, -1966188, 1078340, -391637, -31477,
    216485, -236050, 172298, -90874, -90874, 172298,
    -236050, 216485, -31477, -391637, 1078340, -1966188,
    2874838, -3502647, 3463037, -2365786, -63897, 3849859,
    -8646464, 13676373, -17760457, 19461397, -17339222, 10289050,
    2094592, -19198897, 39191659, -58990175, 74409937, -80435130,
    71443102, -40984867, -19987061, 130751161, -361334173, 1386596978,
    1289624524, -383604864, 158499405, -44703550, -21716922, 58320726,
    -73205962, 72193902, -60533194, 43102378, -24157073, 7010143,
    6181193, -14451945, 17887764, -17348539, 14125069, -9601152,
    4981087, -1119120, -1539967, 2924308, -3234113, 2814342,
    -2035226, 1204498, -521725, 72551, 148235, -199678,
    157612, -87235, -92823, 184349, -269563, 283511,
    -139045, -249202, 927059, -1856992, 2881601, -3710958,
    3948828, -3165927, 1016434, 2620609, -7506921, 12957832,
    -17841704, 20693576, -19948794, 14274319, -2947471, -13788299,
    34466131, -56297281, 75252923, -86280960, 83499815, -59970207,
    5897249, 99291913, -330428515, 1477239419, 1187377964, -397448090,
    182197434, -67838631, -2527833, 44398864, -64755276, 68671703,
    -60918146, 46139515, -28578008, 11709462, 2029744, -11345957,
    16008382, -16619890, 14300765, -10356826, 5995139, -2129980,
    -704581, 2344069, -2911975, 2702741, -2063992, 1303949,
    -637424, 171188, 80128, -161296, 140738, -82109,
    -92906, 193349, -299385, 347913, -248159, -96777,
    752786, -1708537, 2832975, -3853416, 4370990, -3924393,
    2101702, 1314784, -6200522, 11977832, -17584401, 21554458,
    -22225897, 18058931, -8022342, -8020186, 29001075, -52484649,
    74680681, -90604447, 94238763, -78307500, 32501504, 64539995,
    -290789301, 1560556427, 1080959715, -403174649, 201587838, -89019232,
    16231330, 29952610, -55264279, 63933230, -60158543, 48261617,
    -32388385, 16108423, -2086862, -8083298, 13864038, -15594129,
    14205493, -10903350, 6875470, -3078484, 124456, 1734253,
    -2543695, 2543559, -2053143, 1375667, -737039, 262760,
    13468, -121752, 122142, -75717, -90976, 198921,
    -324720, 408284, -356716, 62996, 558173, -1522520,
    2728333, -3925522, 4719797, -4625612, 3171188, -44236,
    -4748834, 10749931, -16986990, 22020734, -24121120, 21567259,
    -13034044, -1997927, 22887148, -47604183, 72676995, -93292466,
    103426925, -95633937, 59350539, 26988856, -242431007, 1635626313,
    971504202, -401191635, 216496320, -107918163, 34225947, 15260758,
    -44929851, 58089295, -58288969, 49445022, -35527557, 20129977,
    -6092214, -4727840, 11499740, -14296081, 13846336, -11234727,
    7608399, -3948213, 931715, 1107055, -2137415, 2341124,
    -2004066, 1419190, -819243, 345790, -50524, -81878,
    102301, -68293, -86923, 200746, -344824, 463235,
    -462544, 227238, 346357, -1301424, 2568123, -3924020,
    4986698, -5254750, 4204012, -1431550, -3176652, 9292700,
    -16054387, 22076204, -25591443, 24727593, -17886116, 4168462,
    16228934, -41728971, 69252410, -94260423, 110855131, -111596087,
    85949574, -12798274, -185483754, 1701613429, 860163021, -391994202,
    226831667, -124258551, 51143483, 600631, -33960606, 51269194,
    -55364062, 49683995, -37948465, 23705462, -9913324, -1344055,
    8963800, -12755214, 13235191, -11349123, 8183309, -4724591,
    1702542, 474700, -1701779, 2100463, -1918836, 1434606,
    -883086, 419023, -110731, -42468, 81689, -60078,
    -80681, 198560, -359026, 511430, -563440, 392881,
    120918, -1048488, 2353888, -3846999, 5164513, -5798013,
    5179532, -2821181, -1511590, 7629468, -14798011, 21712209,
    -26601174, 27473584, -22483441, 10364292, 9143206, -34952286,
    64444541, -93454415, 116342482, -125856628, 111792438, -54194957,
    -120194278, 1757779376, 748090016, -376156227, 232584398, -137817297,
    66698597, -13756952, -22572827, 43617970, -51457142, 48990518,
    -39618281, 26775751, -13481929, 2004206, 6306864, -11004998,
    12388459, -11248821, 8592779, -5395128, 2423310, -150792,
    -1245762, 1827184, -1800150, 1422536, -928005, 481442,
    -166159, -4272, 60769, -51313, -72227, 192177,
    -366744, 551611, -657215, 556720, -114185, -767675,
    2088261, -3693959, 5247608, -6242939, 6077748, -4186553,
    216392, 5787965, -13235686, 20927942, -27122760, 29745598,
    -26734076, 16472300, 1756931, -27386188, 58317877, -90852866,
    119740357, -138100944, 136370229, -96519309, -46925228, 1803492931,
    636426446, -354320019, 233824154, -148427506, 80637647, -27552500,
    -10986326, 35293441, -46658523, 47393769, -40518781, 29292193,
    -16735692, 5254899, 3580917, -9082195, 11326642, -10940093,
    8832660, -5949604, 3081655, -757830, -778488, 1527361,
    -1651261, 1384106, -953821, 532280, -215948, 32024,
    39982, -42236, -61589, 181485, -367504, 582628,
    -741739, 715475, -354674, -463608, 1774953, -3465863,
    5232037, -6578673, 6879703, -5500994, 1975521, 3799878,
    -11391426, 19730605, -27137463, 31491974, -30551062, 22374828,
    -5794958, -19159748, 50963080, -86467595, 120935900, -148043487,
    159180264, -139042825, 33847201, 1838238558, 526286487, -327185268,
    230695884, -155979888, 92742529, -40542356, 579676, 26463039,
    -41073528, 44939272, -40646429, 31217337, -19619265, 8348918,
    838287, -7026114, 10073879, -10433000, 8902080, -6380214,
    3666681, -1335456, -309054, 1207396, -1475898, 1320907,
    -960724, 571021, -259388, 65806, 19744, -33073,
    -48845, 166461, -360949, 603470, -814984, 865852,
    -596027, -141502, 1418701, -3165151, 5115669, -6796208,
    7567869, -6738242, 3732778, 1700322, -9295085, 18135417,
    -26635873, 32670148, -33854160, 27956054, -13371979, -10416917,
    42495776, -80344275, 119854930, -155433762, 179735176, -181000184,
    121537299, 1861623376, 418743253, -295497382, 223414936, -160423125,
    102833788, -52502826, 11910585, 17300530, -34820269, 41687773,
    -40012196, 32525448, -22085204, 11231153, -1869353, -4877817,
    8657421, -9741125, 8803395, -6681658, 4169132, -1873543,
    153644, 873894, -1278180, 1234953, -949262, 597403,
    -295923, 96539, 430, -24036, -34128, 147172,
    -346860, 613287, -875073, 1004610, -833562, 192922,
    1025212, -2795737, 4898263, -6888609, 8126519, -7872960,
    5454508, -472770, -6981904, 16165476, -25618256, 33247626,
    -36571503, 33104222, -20830665, -1314079, 33054853, -72562275,
    116464206, -160061829, 197572005, -221599860, 215455489, 1873382465,
    314815542, -260035430, 212261140, -161763214, 110772975, -63233871,
    22800298, 7982680, -28027225, 37713836, -38641100, 33202780,
    -24094721, 13851453, -4491933, -2679318, 7107059, -8881248,
    8542072, -6851190, 4581528, -2362964, 601072, 533531,
    -1062526, 1128623, -920317, 611416, -325159, 123779,
    -17624, -15318,
];

pub static SRC_INT32_20_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_20_21_4535_5000",
    input_stride: 1,
    output_stride: 1,
    subfilter_count: 20,
    subfilter_length: 116,
    block_in: 21,
    block_out: 20,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_20_21_4535_5000_FIR),
};

static SRC_INT32_20_21_4535_5000_FIR: [i32; 2320] = [
    28596, -37969, 39318, -26432, -6780, 64942,
    -149654, 257950, -381068, 503822, -604888, 658193,
    -635531, 510301, -262106, -118253, 624040, -1228857,
    1884708, -2522557, 3055902, -3387562, 3419505, -3065097,
    2262711, -989248, -728110, 2803741, -5090680, 7384329,
    -9433568, 10959322, -11679804, 11340761, -9748260, 6800902,
    -2517994, -2939813, 9260586, -15984282, 22520384, -28180036,
    32221252, -33904303, 32553141, -27617681, 18731240, -5757333,
    -11179527, 31683568, -55101538, 80563413, -107053956, 133525628,
    -159089632, 183433077, -208235025, 246752966, 1948465463, 143682118,
    -162919600, 159688187, -147437472, 129732898, -108595676, 85646989,
    -62330012, 39928704, -19533888, 2001794, 12077539, -22394614,
    28915024, -31854797, 31639290, -28849936, 24164029, -18293082,
    11924968, -5674379, 44953, 4594886, -8021797, 10153853,
    -11035289, 10812436, -9704159, 7970227, -5880812, 3689831,
    -1614088, -180643, 1586297, -2552427, 3080456, -3213745,
    3025223, -2604250, 2044238, -1432202, 841023, -324761,
    -83041, 368430, -534126, 595332, -575025, 499389,
    -393908, 280461, -175553, 89663, -27533, -10850,
    28882, -31850, 31159, -43547, 49315, -41976,
    14735, 38195, -119994, 229564, -360060, 497940,
    -622860, 708671, -725672, 644114, -438741, 93969,
    390915, -997279, 1684225, -2387994, 3024337, -3494211,
    3692782, -3521299, 2900907, -1787065, 182897, 1850376,
    -4187757, 6641105, -8967200, 10883629, -12092084, 12307753,
    -11292596, 8889589, -5054464, -118656, 6381202, -13326523,
    20400601, -26927762, 32150581, -35281670, 35563593, -32331934,
    25075709, -13488841, -2493669, 22681141, -46640724, 73747602,
    -103288003, 134656048, -167772265, 204211720, -251580954, 355702969,
    1935262093, 47435423, -116575641, 133538190, -133122050, 123409026,
    -107921936, 88923444, -68198163, 47260279, -27392275, 9631609,
    5252376, -16773637, 24729206, -29181311, 30422876, -28929556,
    25302863, -20209545, 14322484, -8267838, 2582243, 2317341,
    -6149947, 8773246, -10173931, 10448224, -9775533, 8388602,
    -6543373, 4491449, -2457381, 622251, 885816, -1994359,
    2683324, -2977145, 2933746, -2632140, 2160160, -1603605,
    1037714, -521463, 94788, 221512, -423710, 521591,
    -534108, 484940, -398496, 296774, -197256, 111907,
    -47123, 4449, 18239, -25340, 33179, -48438,
    58644, -57151, 36581, 9925, -87095, 195755,
    -331141, 481649, -628335, 745489, -802486, 766972,
    -609267, 307626, 146196, -741809, 1446321, -2202591,
    2930342, -3530631, 3893853, -3910987, 3487350, -2557624,
    1100561, 848507, -3189291, 5754077, -8312538, 10584605,
    -12261336, 13032848, -12621424, 10817097, -7512354, 2732274,
    3343575, -10370732, 17843363, -25112988, 31422242, -35951974,
    37878401, -36435668, 30977961, -21034542, 6350439, 13095170,
    -37102460, 65310809, -97333934, 133043868, -173230450, 221501858,
    -292005981, 469483863, 1909016569, -41156791, -70118993, 105571615,
    -116493838, 114732464, -105085437, 90355189, -72607085, 53542409,
    -34602190, 16979578, -1604527, -10872519, 20085896, -25944137,
    28602838, -28423010, 25918698, -21698648, 16407165, -10669048,
    5042761, 15069, -4172036, 7228818, -9115358, 9876287,
    -9648321, 8632763, -7066331, 5193296, -3241394, 1403242,
    175738, -1402745, 2236879, -2683361, 2784129, -2606396,
    2230741, -1740062, 1210435, -704526, 267796, 72610,
    -306681, 438666, -483181, 460974, -394919, 306699,
    -214425, 131285, -65183, 19160, 7617, -18591,
    34582, -52505, 67079, -71624, 58309, -19317,
    -51565, 157099, -294737, 455071, -620954, 767633,
    -864149, 876154, -770072, 518345, -105260, -467348,
    1175351, -1969456, 2775010, -3495163, 4017682, -4225356,
    4009403, -3284821, 2006164, -181896, -2114679, 4739860,
    -7480999, 10066059, -12181625, 13498792, -13705438, 12542441,
    -9840660, 5555001, 208249, -7174417, 14896659, -22767271,
    30044581, -35894369, 39443081, -39838554, 36312556, -28238197,
    15174189, 3113583, -26665780, 55398982, -89272825, 128662343,
    -175266903, 234831219, -328563463, 586957231, 1870048983, -121388376,
    -24426479, 76392705, -97939731, 103924504, -100181002, 89942102,
    -75488532, 58662058, -41026025, 23900591, -8354325, -4813453,
    15083630, -22214357, 26221909, -27346225, 26004103, -22734350,
    18139817, -12831256, 7377441, -2265082, -2129149, 5553470,
    -7882992, 9110335, -9327172, 8699619, -7440609, 5782268,
    -3950924, 2146770, -529443, -789976, 1750779, -2339080,
    2580174, -2528276, 2255195, -1839319, 1356049, -870457,
    432558, -75225, -185528, 348409, -423473, 428172,
    -383425, 310184, -226822, 147481, -81389, 33001,
    -2766, -11757, 35303, -55625, 74408, -85066,
    79458, -48944, -14078, 114288, -251440, 418543,
    -600618, 774370, -909120, 969178, -917685, 721743,
    -358385, -179255, 876411, -1692715, 2560710, -3387602,
    4060757, -4457036, 4455597, -3953254, 2881023, -1220054,
    -985086, 3617850, -6487739, 9336335, -11852053, 13693460,
    -14520051, 14028369, -11990531, 8291566, -2961655, -3800557,
    11616904, -19933320, 28039283, -35102664, 40217891, -42463593,
    40964239, -34948718, 23797181, -7065144, -15530582, 44190366,
    -79229903, 121539932, -173747319, 243788028, -360327026, 706909144,
    1818833639, -192684883, 19677015, 46609785, -77874729, 91244085,
    -93342978, 87720959, -76805846, 62531013, -46543655, 30259793,
    -14861849, 1279465, 9827186, -18072300, 23333743, -25726508,
    25562449, -23300037, 19488744, -14712990, 9540239, -4477169,
    -63285, 3782424, -6503542, 8167869, -8820612, 8589700,
    -7660243, 6247688, -4572448, 2838214, -1215507, -168719,
    1235365, -1951927, 2326735, -2400080, 2233678, -1899911,
    1472019, -1016164, 585869, -219015, -62781, 252787,
    -356366, 387383, -364420, 307306, -234314, 160249,
    -95463, 45716, -12703, -4984, 35290, -57690,
    80434, -97158, 99566, -78348, 24634, 68115,
    -201997, 372618, -567493, 765274, -936173, 1043848,
    -1048849, 913519, -607999, 116747, 555243, -1377452,
    2291054, -3209221, 4021177, -4600267, 4815884, -4548545,
    3706870, -2244797, 176965, 2409856, -5351385, 8408182,
    -11276822, 13610154, -15045941, 15242156, -13916289, 10885208,
    -6101696, -316369, 8067862, -16664237, 25441064, -33585584,
    40178800, -44248835, 44830400, -41023308, 32040867, -17235874,
    -3913879, 31892419, -67372821, 111760906, -168604629, 248030711,
    -386406114, 828066134, 1755992171, -254608978, 61430292, 16823863,
    -56733289, 76981978, -84741892, 83764138, -76554263, 65087333,
    -51054640, 35935184, -20998281, 7282752, 4425417, -13605833,
    20001727, -23601883, 24607740, -23388762, 20430322, -16278858,
    11489036, -6577072, 1983506, 1952491, -5006423, 7069784,
    -8140836, 8307117, -7722467, 6581505, -5094381, 3464178,
    -1868788, 448343, 701445, -1530295, 2029604, -2225092,
    2167280, -1921177, 1556445, -1139012, 724812, -355915,
    59044, 153839, -283366, 339598, -338456, 298272,
    -236870, 169420, -107180, 57079, -22006, 1589,
    34507, -58610, 84980, -107603, 118182, -106907,
    63793, 19463, -147300, 318052, -522014, 740237,
    -944431, 1098315, -1160595, 1089544, -848917, 414693,
    218130, -1029610, 1970836, -2962763, 3898715, -4651028,
    5081857, -5057648, 4466237, -3234995, 1348041, 1139681,
    -4093687, 7298541, -10465204, 13247795, -15269498, 16156325,
    -15576392, 13281537, -9147421, 3208029, 4319420, -13022527,
    22297093, -31366756, 39318136, -45148798, 47823306, -46330460,
    39732207, -27190889, 7954352, 18738091, -53909069, 99464865,
    -159842061, 247296616, -405961319, 949112236, 1682284525, -306863707,
    100146230, -12382327, -34960491, 61454456, -74580465, 78177639,
    -74760561, 66296263, -54480013, 40819931, -26643688, 13076025,
    -1010998, -8908503, 16297600, -21020218, 23164222, -23003299,
    20949395, -17500201, 13186451, -8523375, 3969975, 101307,
    -3423138, 5839914, -7303421, 7859432, -7627732, 6778422,
    -5507285, 4012749, -2476450, 1048764, 160062, -1083171,
    1695380, -2007499, 2057981, -1903266, 1608097, -1236876,
    846806, -483268, 177493, 53634, -206070, 285933,
    -306211, 283410, -234563, 174906, -116371, 66903,
    -30505, 7832, 32931, -58317, 87896, -116125,
    134871, -134002, 102595, -30715, -88370, 255798,
    -464882, 699482, -933390, 1131111, -1250304, 1245948,
    -1076051, 708486, -128231, -655884, 1605957, -2652404,
    3694841, -4607151, 5246942, -5469133, 5142817, -4169994,
    2504272, -167345, -2739106, 6028242, -9431402, 12610999,
    -15183162, 16749250, -16934325, 15429670, -12035683, 6701016,
    446214, -9078922, 18666150, -28484367, 37644916, -45135574,
    49872051, -50752766, 46707256, -36724072, 19835636, 4981534,
    -39082539, 84845152, -147534937, 241409552, -418219248, 1068706859,
    1598597959, -349293579, 135220696, -40454666, -13003209, 44996592,
    -63089047, 71098465, -71482097, 66150582, -56763606, 44824347,
    -31689340, 18544398, -6371801, -4077595, 12299926, -18038166,
    21265800, -22155992, 21039506, -18355609, 14600555, -10278174,
    5856499, -1733435, -1786617, 4504516, -6326974, 7257470,
    -7379666, 6835975, -5804041, 4473720, -3026732, 1620590,
    -377726, -619939, 1331328, -1752297, 1908607, -1847116,
    1626430, -1308166, 949659, -598657, 290227, -45775,
    -126131, 227599, -268479, 263158, -227561, 176695,
    -122924, 75036, -38056, 13628, 30557, -56768,
    89061, -122485, 149227, -159028, 140222, -81411,
    -26338, 186988, -397050, 643559, -902937, 1141194,
    -1315771, 1379205, -1284524, 992030, -476855, -263590,
    1203311, -2283686, 3412714, -4468378, 5306556, -5773438,
    5721817, -5030037, 3621829, -1484867, -1314343, 4621617,
    -8194306, 11710045, -14785635, 17005667, -17959395, 17283305,
    -14705941, 10090921, -3473842, -4911011, 14617543, -24990540,
    35184830, -44199584, 50924192, -54189473, 52814605, -45635109,
    31487716, -9106689, -23169304, 68146184, -131831120, 230286006,
    -422486655, 1185503219, 1505934236, -381883483, 166139833, -66877181,
    8698570, 27955317, -50520593, 62691426, -66805240, 64670398,
    -57872915, 47877505, -36039783, 23580744, -11549381, 787870,
    8092437, -14719928, 18955259, -20868409, 20702943, -18831287,
    15705463, -11807815, 7605872, -3514755, -130533, 3091714,
    -5232721, 6515069, -6984963, 6754549, -5979963, 4838781,
    -3509178, 2152593, -901073, -150189, 945221, -1465172,
    1722755, -1754428, 1611580, -1351861, 1031602, -699950,
    395063, -142384, -45221, 165877, -226147, 238054,
    -216125, 174851, -126782, 81368, -44537, 18876,
    27400, -53944, 88389, -126478, 160881, -181406,
    175862, -131584, 37577, 112912, -319714, 573341,
    -853357, 1127970, -1355252, 1486212, -1469767, 1259348,
    -820615, 139471, 770658, -1863420, 3057140, -4236399,
    5258225, -5963087, 6190274, -5796687, 4677418, -2786038,
    152186, 3106037, -6777159, 10560715, -14081970, 16917040,
    -18627414, 18801708, -17101524, 13307485, -7361120, -601729,
    10229799, -20950407, 31979897, -42349972, 50947022, -56558729,
    57918625, -53733639, 42669393, -23244790, -6472674, 49659714,
    -112950094, 213939882, -418163615, 1298167033, 1405395212, -404755490,
    192485653, -91180648, 29720090, 10682376, -37145263, 53145436,
    -60843248, 61902410, -57799471, 49928454, -39614621, 28087774,
    -16440917, 5589155, 3762290, -11135887, 16283308, -19170826,
    19950606, -18921259, 16481803, -13083529, 9184031, -5207121,
    1511385, 1630914, -4044056, 5648763, -6453215, 6537344,
    -6032867, 5101658, -3914831, 2634491, -1399565, 316480,
    545172, -1152381, 1504710, -1627621, 1564356, -1367513,
    1091320, -785335, 490016, -234289, 34998, 102090,
    -180177, 208723, -200600, 169511, -127947, 85828,
    -49855, 23489, 23489, -49855, 85828, -127947,
    169511, -200600, 208723, -180177, 102090, 34998,
    -234289, 490016, -785335, 1091320, -1367513, 1564356,
    -1627621, 1504710, -1152381, 545172, 316480, -1399565,
    2634491, -3914831, 5101658, -6032867, 6537344, -6453215,
    5648763, -4044056, 1630914, 1511385, -5207121, 9184031,
    -13083529, 16481803, -18921259, 19950606, -19170826, 16283308,
    -11135887, 3762290, 5589155, -16440917, 28087774, -39614621,
    49928454, -57799471, 61902410, -60843248, 53145436, -37145263,
    10682376, 29720090, -91180648, 192485653, -404755490, 1405395212,
    1298167033, -418163615, 213939882, -112950094, 49659714, -6472674,
    -23244790, 42669393, -53733639, 57918625, -56558729, 50947022,
    -42349972, 31979897, -20950407, 10229799, -601729, -7361120,
    13307485, -17101524, 18801708, -18627414, 16917040, -14081970,
    10560715, -6777159, 3106037, 152186, -2786038, 4677418,
    -5796687, 6190274, -5963087, 5258225, -4236399, 3057140,
    -1863420, 770658, 139471, -820615, 1259348, -1469767,
    1486212, -1355252, 1127970, -853357, 573341, -319714,
    112912, 37577, -131584, 175862, -181406, 160881,
    -126478, 88389, -53944, 27400, 18876, -44537,
    81368, -126782, 174851, -216125, 238054, -226147,
    165877, -45221, -142384, 395063, -699950, 1031602,
    -1351861, 1611580, -1754428, 1722755, -1465172, 945221,
    -150189, -901073, 2152593, -3509178, 4838781, -5979963,
    6754549, -6984963, 6515069, -5232721, 3091714, -130533,
    -3514755, 7605872, -11807815, 15705463, -18831287, 20702943,
    -20868409, 18955259, -14719928, 8092437, 787870, -11549381,
    23580744, -36039783, 47877505, -57872915, 64670398, -66805240,
    62691426, -50520593, 27955317, 8698570, -66877181, 166139833,
    -381883483, 1505934236, 1185503219, -422486655, 230286006, -131831120,
    68146184, -23169304, -9106689, 31487716, -45635109, 52814605,
    -54189473, 50924192, -44199584, 35184830, -24990540, 14617543,
    -4911011, -3473842, 10090921, -14705941, 17283305, -17959395,
    17005667, -14785635, 11710045, -8194306, 4621617, -1314343,
    -1484867, 3621829, -5030037, 5721817, -5773438, 5306556,
    -4468378, 3412714, -2283686, 1203311, -263590, -476855,
    992030, -1284524, 1379205, -1315771, 1141194, -902937,
    643559, -397050, 186988, -26338, -81411, 140222,
    -159028, 149227, -122485, 89061, -56768, 30557,
    13628, -38056, 75036, -122924, 176695, -227561,
    263158, -268479, 227599, -126131, -45775, 290227,
    -598657, 949659, -1308166, 1626430, -1847116, 1908607,
    -1752297, 1331328, -619939, -377726, 1620590, -3026732,
    4473720, -5804041, 6835975, -7379666, 7257470, -6326974,
    4504516, -1786617, -1733435, 5856499, -10278174, 14600555,
    -18355609, 21039506, -22155992, 21265800, -18038166, 12299926,
    -4077595, -6371801, 18544398, -31689340, 44824347, -56763606,
    66150582, -71482097, 71098465, -63089047, 44996592, -13003209,
    -40454666, 135220696, -349293579, 1598597959, 1068706859, -418219248,
    241409552, -147534937, 84845152, -39082539, 4981534, 19835636,
    -36724072, 46707256, -50752766, 49872051, -45135574, 37644916,
    -28484367, 18666150, -9078922, 446214, 6701016, -12035683,
    15429670, -16934325, 16749250, -15183162, 12610999, -9431402,
    6028242, -2739106, -167345, 2504272, -4169994, 5142817,
    -5469133, 5246942, -4607151, 3694841, -2652404, 1605957,
    -655884, -128231, 708486, -1076051, 1245948, -1250304,
    1131111, -933390, 699482, -464882, 255798, -88370,
    -30715, 102595, -134002, 134871, -116125, 87896,
    -58317, 32931, 7832, -30505, 66903, -116371,
    174906, -234563, 283410, -306211, 285933, -206070,
    53634, 177493, -483268, 846806, -1236876, 1608097,
    -1903266, 2057981, -2007499, 1695380, -1083171, 160062,
    1048764, -2476450, 4012749, -5507285, 6778422, -7627732,
    7859432, -7303421, 5839914, -3423138, 101307, 3969975,
    -8523375, 13186451, -17500201, 20949395, -23003299, 23164222,
    -21020218, 16297600, -8908503, -1010998, 13076025, -26643688,
    40819931, -54480013, 66296263, -74760561, 78177639, -74580465,
    61454456, -34960491, -12382327, 100146230, -306863707, 1682284525,
    949112236, -405961319, 247296616, -159842061, 99464865, -53909069,
    18738091, 7954352, -27190889, 39732207, -46330460, 47823306,
    -45148798, 39318136, -31366756, 22297093, -13022527, 4319420,
    3208029, -9147421, 13281537, -15576392, 16156325, -15269498,
    13247795, -10465204, 7298541, -4093687, 1139681, 1348041,
    -3234995, 4466237, -5057648, 5081857, -4651028, 3898715,
    -2962763, 1970836, -1029610, 218130, 414693, -848917,
    1089544, -1160595, 1098315, -944431, 740237, -522014,
    318052, -147300, 19463, 63793, -106907, 118182,
    -107603, 84980, -58610, 34507, 1589, -22006,
    57079, -107180, 169420, -236870, 298272, -338456,
    339598, -283366, 153839, 59044, -355915, 724812,
    -1139012, 1556445, -1921177, 2167280, -2225092, 2029604,
    -1530295, 701445, 448343, -1868788, 3464178, -5094381,
    6581505, -7722467, 8307117, -8140836, 7069784, -5006423,
    1952491, 1983506, -6577072, 11489036, -16278858, 20430322,
    -23388762, 24607740, -23601883, 20001727, -13605833, 4425417,
    7282752, -20998281, 35935184, -51054640, 65087333, -76554263,
    83764138, -84741892, 76981978, -56733289, 16823863, 61430292,
    -254608978, 1755992171, 828066134, -386406114, 248030711, -168604629,
    111760906, -67372821, 31892419, -3913879, -17235874, 32040867,
    -41023308, 44830400, -44248835, 40178800, -33585584, 25441064,
    -16664237, 8067862, -316369, -6101696, 10885208, -13916289,
    15242156, -15045941, 13610154, -11276822, 8408182, -5351385,
    2409856, 176965, -2244797, 3706870, -4548545, 4815884,
    -4600267, 4021177, -3209221, 2291054, -1377452, 555243,
    116747, -607999, 913519, -1048849, 1043848, -936173,
    765274, -567493, 372618, -201997, 68115, 24634,
    -78348, 99566, -97158, 80434, -57690, 35290,
    -4984, -12703, 45716, -95463, 160249, -234314,
    307306, -364420, 387383, -356366, 252787, -62781,
    -219015, 585869, -1016164, 1472019, -1899911, 2233678,
    -2400080, 2326735, -1951927, 1235365, -168719, -1215507,
    2838214, -4572448, 6247688, -7660243, 8589700, -8820612,
    8167869, -6503542, 3782424, -63285, -4477169, 9540239,
    -14712990, 19488744, -23300037, 25562449, -25726508, 23333743,
    -18072300, 9827186, 1279465, -14861849, 30259793, -46543655,
    62531013, -76805846, 87720959, -93342978, 91244085, -77874729,
    46609785, 19677015, -192684883, 1818833639, 706909144, -360327026,
    243788028, -173747319, 121539932, -79229903, 44190366, -15530582,
    -7065144, 23797181, -34948718, 40964239, -42463593, 40217891,
    -35102664, 28039283, -19933320, 11616904, -3800557, -2961655,
    8291566, -11990531, 14028369, -14520051, 13693460, -11852053,
    9336335, -6487739, 3617850, -985086, -1220054, 2881023,
    -3953254, 4455597, -4457036, 4060757, -3387602, 2560710,
    -1692715, 876411, -179255, -358385, 721743, -917685,
    969178, -909120, 774370, -600618, 418543, -251440,
    114288, -14078, -48944, 79458, -85066, 74408,
    -55625, 35303, -11757, -2766, 33001, -81389,
    147481, -226822, 310184, -383425, 428172, -423473,
    348409, -185528, -75225, 432558, -870457, 1356049,
    -1839319, 2255195, -2528276, 2580174, -2339080, 1750779,
    -789976, -529443, 2146770, -3950924, 5782268, -7440609,
    8699619, -9327172, 9110335, -7882992, 5553470, -2129149,
    -2265082, 7377441, -12831256, 18139817, -22734350, 26004103,
    -27346225, 26221909, -22214357, 15083630, -4813453, -8354325,
    23900591, -41026025, 58662058, -75488532, 89942102, -100181002,
    103924504, -97939731, 76392705, -24426479, -121388376, 1870048983,
    586957231, -328563463, 234831219, -175266903, 128662343, -89272825,
    55398982, -26665780, 3113583, 15174189, -28238197, 36312556,
    -39838554, 39443081, -35894369, 30044581, -22767271, 14896659,
    -7174417, 208249, 5555001, -9840660, 12542441, -13705438,
    13498792, -12181625, 10066059, -7480999, 4739860, -2114679,
    -181896, 2006164, -3284821, 4009403, -4225356, 4017682,
    -3495163, 2775010, -1969456, 1175351, -467348, -105260,
    518345, -770072, 876154, -864149, 767633, -620954,
    455071, -294737, 157099, -51565, -19317, 58309,
    -71624, 67079, -52505, 34582, -18591, 7617,
    19160, -65183, 131285, -214425, 306699, -394919,
    460974, -483181, 438666, -306681, 72610, 267796,
    -704526, 1210435, -1740062, 2230741, -2606396, 2784129,
    -2683361, 2236879, -1402745, 175738, 1403242, -3241394,
    5193296, -7066331, 8632763, -9648321, 9876287, -9115358,
    7228818, -4172036, 15069, 5042761, -10669048, 16407165,
    -21698648, 25918698, -28423010, 28602838, -25944137, 20085896,
    -10872519, -1604527, 16979578, -34602190, 53542409, -72607085,
    90355189, -105085437, 114732464, -116493838, 105571615, -70118993,
    -41156791, 1909016569, 469483863, -292005981, 221501858, -173230450,
    133043868, -97333934, 65310809, -37102460, 13095170, 6350439,
    -21034542, 30977961, -36435668, 37878401, -35951974, 31422242,
    -25112988, 17843363, -10370732, 3343575, 2732274, -7512354,
    10817097, -12621424, 13032848, -12261336, 10584605, -8312538,
    5754077, -3189291, 848507, 1100561, -2557624, 3487350,
    -3910987, 3893853, -3530631, 2930342, -2202591, 1446321,
    -741809, 146196, 307626, -609267, 766972, -802486,
    745489, -628335, 481649, -331141, 195755, -87095,
    9925, 36581, -57151, 58644, -48438, 33179,
    -25340, 18239, 4449, -47123, 111907, -197256,
    296774, -398496, 484940, -534108, 521591, -423710,
    221512, 94788, -521463, 1037714, -1603605, 2160160,
    -2632140, 2933746, -2977145, 2683324, -1994359, 885816,
    622251, -2457381, 4491449, -6543373, 8388602, -9775533,
    10448224, -10173931, 8773246, -6149947, 2317341, 2582243,
    -8267838, 14322484, -20209545, 25302863, -28929556, 30422876,
    -29181311, 24729206, -16773637, 5252376, 9631609, -27392275,
    47260279, -68198163, 88923444, -107921936, 123409026, -133122050,
    133538190, -116575641, 47435423, 1935262093, 355702969, -251580954,
    204211720, -167772265, 134656048, -103288003, 73747602, -46640724,
    22681141, -2493669, -13488841, 25075709, -32331934, 35563593,
    -35281670, 32150581, -26927762, 20400601, -13326523, 6381202,
    -118656, -5054464, 8889589, -11292596, 12307753, -12092084,
    10883629, -8967200, 6641105, -4187757, 1850376, 182897,
    -1787065, 2900907, -3521299, 3692782, -3494211, 3024337,
    -2387994, 1684225, -997279, 390915, 93969, -438741,
    644114, -725672, 708671, -622860, 497940, -360060,
    229564, -119994, 38195, 14735, -41976, 49315,
    -43547, 31159, -31850, 28882, -10850, -27533,
    89663, -175553, 280461, -393908, 499389, -575025,
    595332, -534126, 368430, -83041, -324761, 841023,
    -1432202, 2044238, -2604250, 3025223, -3213745, 3080456,
    -2552427, 1586297, -180643, -1614088, 3689831, -5880812,
    7970227, -9704159, 10812436, -11035289, 10153853, -8021797,
    4594886, 44953, -5674379, 11924968, -18293082, 24164029,
    -28849936, 31639290, -31854797, 28915024, -22394614, 12077539,
    2001794, -19533888, 39928704, -62330012, 85646989, -108595676,
    129732898, -147437472, 159688187, -162919600, 143682118, 1948465463,
    246752966, -208235025, 183433077, -159089632, 133525628, -107053956,
    80563413, -55101538, 31683568, -11179527, -5757333, 18731240,
    -27617681, 32553141, -33904303, 32221252, -28180036, 22520384,
    -15984282, 9260586, -2939813, -2517994, 6800902, -9748260,
    11340761, -11679804, 10959322, -9433568, 7384329, -5090680,
    2803741, -728110, -989248, 2262711, -3065097, 3419505,
    -3387562, 3055902, -2522557, 1884708, -1228857, 624040,
    -118253, -262106, 510301, -635531, 658193, -604888,
    503822, -381068, 257950, -149654, 64942, -6780,
    -26432, 39318, -37969, 28596,
];

pub static SRC_INT32_21_2_3239_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_2_3239_5000",
    input_stride: 1,
    output_stride: 11,
    subfilter_count: 21,
    subfilter_length: 32,
    block_in: 2,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_2_3239_5000_FIR),
};

static SRC_INT32_21_2_3239_5000_FIR: [i32; 672] = [
    -58562, 431588, -1269437, 2211674, -2033047, -1172417,
    8921724, -20559015, 31618190, -33584791, 15972557, 29485554,
    -104143744, 199798291, -300846491, 398444653, 1768177661, 310464078,
    -275395710, 198001090, -112235984, 39763687, 7678019, -28757610,
    29932695, -20844784, 9964718, -2163521, -1413946, 1944649,
    -1203874, 434171, -49585, 420161, -1317727, 2458878,
    -2653694, -112743, 7688535, -19933478, 32865355, -38052029,
    24297787, 18395799, -94128912, 198531592, -322946437, 489261675,
    1759120683, 225974892, -247123877, 193286693, -118350352, 49101079,
    -460395, -23656670, 27850597, -20799539, 10809313, -3073661,
    -806220, 1663402, -1123432, 428686, -37413, 399226,
    -1346495, 2680658, -3265492, 1001353, 6276847, -18964596,
    33637973, -42075873, 32523581, 6640533, -82278243, 194094043,
    -341183812, 582216489, 1741091627, 145581973, -216571901, 185838080,
    -122462824, 57387005, -8323716, -18369465, 25418286, -20436871,
    11450784, -3892317, -218995, 1373435, -1030602, 416003,
    -21929, 368265, -1353693, 2871514, -3857632, 2154128,
    4701806, -17654227, 33906118, -45577035, 40517017, -5618850,
    -68709725, 186421467, -355071799, 676573661, 1714259333, 69834465,
    -184284923, 175870660, -124579957, 64530223, -15801052, -12983403,
    22685924, -19774816, 11887815, -4610925, 339417, 1080063,
    -927915, 397060, -3094, 326920, -1337528, 3026150,
    -4419052, 3328435, 2981899, -16009850, 33646874, -48481797,
    48144378, -18207684, -53571861, 175494994, -364155227, 771568435,
    1678874665, -779167, -150805557, 163628091, -124737793, 70459731,
    -22791024, -7584454, 19706527, -18835395, 12122382, -5222929,
    861617, 788336, -817897, 372834, 19049, 275018,
    -1296514, 3139582, -4938621, 4505946, 1138793, -14044658,
    32844954, -50723379, 55273237, -30940298, -37042470, 161343040,
    -368017063, 866414625, 1635267671, -65835310, -116667320, 149377851,
    -123000367, 75125192, -29203012, -2255869, 16535037, -17644115,
    12159576, -5723794, 1341193, 502966, -703021, 344325,
    44364, 212590, -1229522, 3207248, -5405327, 5667407,
    -802890, -11777567, 31493224, -52243243, 61774591, -43622538,
    -19327010, 144042700, -366284579, 960312840, 1583843851, -124978545,
    -82388368, 133406618, -119457845, 78497041, -34958200, 2923017,
    13227392, -16229434, 12007396, -6110984, 1772776, 228266,
    -585668, 312529, 72621, 139887, -1135824, 3225118,
    -5808473, 6792923, -2815859, -9233127, 29593113, -52992303,
    67524994, -56054487, -656441, 123720517, -358635121, 1052458954,
    1525079585, -177924142, -48465578, 116015533, -114224345, 80566275,
    -39990402, 7877887, 9839615, -14622191, 11676498, -6383912,
    2152074, -31903, -468085, 278420, 103489, 57392,
    -1015137, 3189790, -6137878, 7862258, -4870493, -6441336,
    27154893, -52932033, 72408695, -68033375, 18715372, 100552604,
    -344801376, 1142052722, 1459516763, -224459684, -15369065, 97515416,
    -107435466, 81343930, -44246668, 12540422, 6426932, -12855029,
    11179908, -6543856, 2475889, -274166, -352357, 242928,
    136533, -34171, -867657, 3098595, -6384084, 8855166,
    -6935233, -3437365, 24197832, -52035436, 76319701, -79356615,
    38514668, 74764091, -324576084, 1228306425, 1387756711, -264445815,
    16462812, 78221989, -99245582, 80860281, -47687670, 16849158,
    3042941, -10961811, 10532712, -6593849, 2742107, -495667,
    -240379, 206928, 171223, -133832, -694090, 2949683,
    -6538549, 9751730, -8977027, -261177, 20750205, -50287865,
    79163772, -89824939, 58451198, 46627895, -297816110, 1310453452,
    1310453452, -297816110, 46627895, 58451198, -89824939, 79163772,
    -50287865, 20750205, -261177, -8977027, 9751730, -6538549,
    2949683, -694090, -133832, 171223, 206928, -240379,
    -495667, 2742107, -6593849, 10532712, -10961811, 3042941,
    16849158, -47687670, 80860281, -99245582, 78221989, 16462812,
    -264445815, 1387756711, 1228306425, -324576084, 74764091, 38514668,
    -79356615, 76319701, -52035436, 24197832, -3437365, -6935233,
    8855166, -6384084, 3098595, -867657, -34171, 136533,
    242928, -352357, -274166, 2475889, -6543856, 11179908,
    -12855029, 6426932, 12540422, -44246668, 81343930, -107435466,
    97515416, -15369065, -224459684, 1459516763, 1142052722, -344801376,
    100552604, 18715372, -68033375, 72408695, -52932033, 27154893,
    -6441336, -4870493, 7862258, -6137878, 3189790, -1015137,
    57392, 103489, 278420, -468085, -31903, 2152074,
    -6383912, 11676498, -14622191, 9839615, 7877887, -39990402,
    80566275, -114224345, 116015533, -48465578, -177924142, 1525079585,
    1052458954, -358635121, 123720517, -656441, -56054487, 67524994,
    -52992303, 29593113, -9233127, -2815859, 6792923, -5808473,
    3225118, -1135824, 139887, 72621, 312529, -585668,
    228266, 1772776, -6110984, 12007396, -16229434, 13227392,
    2923017, -34958200, 78497041, -119457845, 133406618, -82388368,
    -124978545, 1583843851, 960312840, -366284579, 144042700, -19327010,
    -43622538, 61774591, -52243243, 31493224, -11777567, -802890,
    5667407, -5405327, 3207248, -1229522, 212590, 44364,
    344325, -703021, 502966, 1341193, -5723794, 12159576,
    -17644115, 16535037, -2255869, -29203012, 75125192, -123000367,
    149377851, -116667320, -65835310, 1635267671, 866414625, -368017063,
    161343040, -37042470, -30940298, 55273237, -50723379, 32844954,
    -14044658, 1138793, 4505946, -4938621, 3139582, -1296514,
    275018, 19049, 372834, -817897, 788336, 861617,
    -5222929, 12122382, -18835395, 19706527, -7584454, -22791024,
    70459731, -124737793, 163628091, -150805557, -779167, 1678874665,
    771568435, -364155227, 175494994, -53571861, -18207684, 48144378,
    -48481797, 33646874, -16009850, 2981899, 3328435, -4419052,
    3026150, -1337528, 326920, -3094, 397060, -927915,
    1080063, 339417, -4610925, 11887815, -19774816, 22685924,
    -12983403, -15801052, 64530223, -124579957, 175870660, -184284923,
    69834465, 1714259333, 676573661, -355071799, 186421467, -68709725,
    -5618850, 40517017, -45577035, 33906118, -17654227, 4701806,
    2154128, -3857632, 2871514, -1353693, 368265, -21929,
    416003, -1030602, 1373435, -218995, -3892317, 11450784,
    -20436871, 25418286, -18369465, -8323716, 57387005, -122462824,
    185838080, -216571901, 145581973, 1741091627, 582216489, -341183812,
    194094043, -82278243, 6640533, 32523581, -42075873, 33637973,
    -18964596, 6276847, 1001353, -3265492, 2680658, -1346495,
    399226, -37413, 428686, -1123432, 1663402, -806220,
    -3073661, 10809313, -20799539, 27850597, -23656670, -460395,
    49101079, -118350352, 193286693, -247123877, 225974892, 1759120683,
    489261675, -322946437, 198531592, -94128912, 18395799, 24297787,
    -38052029, 32865355, -19933478, 7688535, -112743, -2653694,
    2458878, -1317727, 420161, -49585, 434171, -1203874,
    1944649, -1413946, -2163521, 9964718, -20844784, 29932695,
    -28757610, 7678019, 39763687, -112235984, 198001090, -275395710,
    310464078, 1768177661, 398444653, -300846491, 199798291, -104143744,
    29485554, 15972557, -33584791, 31618190, -20559015, 8921724,
    -1172417, -2033047, 2211674, -1269437, 431588, -58562,
];

pub static SRC_INT32_21_4_1080_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_4_1080_5000",
    input_stride: 3,
    output_stride: 16,
    subfilter_count: 21,
    subfilter_length: 16,
    block_in: 4,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_4_1080_5000_FIR),
};

static SRC_INT32_21_4_1080_5000_FIR: [i32; 336] = [
    114078, 1783403, -9291077, -2272133, 63283082, -76514848,
    -163064617, 634472973, 1305177602, 582622288, -176282254, -63834086,
    62210788, -4624150, -8396718, 1798774, 159286, 1734402,
    -10171587, 319068, 63790030, -89324475, -147326712, 686166796,
    1301242396, 530878646, -187038572, -51390474, 60622455, -6731094,
    -7500567, 1784537, 213217, 1647807, -11025188, 3140262,
    63684918, -102146538, -129025069, 737435476, 1293395653, 479499774,
    -195407026, -39283634, 58569334, -8590209, -6613617, 1744713,
    276112, 1519791, -11837909, 6178818, 62924305, -114857086,
    -108132564, 788008216, 1281684524, 428735502, -201474517, -27604106,
    56103972, -10201682, -5745741, 1683258, 348031, 1346738,
    -12594979, 9418561, 61468691, -127325355, -84639171, 837613614,
    1266179277, 378826120, -205340251, -16433029, 53279596, -11568428,
    -4905663, 1604007, 428835, 1125322, -13280947, 12839695,
    59283192, -139414587, -58552597, 885981593, 1246972748, 330000850,
    -207114528, -5841926, 50149526, -12695862, -4100942, 1510632,
    518157, 852597, -13879838, 16418772, 56338201, -150982921,
    -29898779, 932845357, 1224179622, 282476427, -206917480, 4107419,
    46766614, -13591652, -3337979, 1406598, 615385, 526075,
    -14375311, 20128702, 52610037, -161884388, 1277754, 977943332,
    1197935544, 236455800, -204877764, 13362988, 43182731, -14265470,
    -2622027, 1295131, 719639, 143820, -14750849, 23938803,
    48081560, -171969963, 34913666, 1021021096, 1168396067, 192126973,
    -201131230, 21882458, 39448282, -14728731, -1957230, 1179189,
    829757, -295469, -14989958, 27814895, 42742761, -181088706,
    70926753, 1061833268, 1135735454, 149661983, -195819567, 29633055,
    35611779, -14994330, -1346658, 1061447, 944280, -792369,
    -15076380, 31719449, 36591311, -189088953, 109216030, 1100145341,
    1100145341, 109216030, -189088953, 36591311, 31719449, -15076380,
    -792369, 944280, 1061447, -1346658, -14994330, 35611779,
    29633055, -195819567, 149661983, 1135735454, 1061833268, 70926753,
    -181088706, 42742761, 27814895, -14989958, -295469, 829757,
    1179189, -1957230, -14728731, 39448282, 21882458, -201131230,
    192126973, 1168396067, 1021021096, 34913666, -171969963, 48081560,
    23938803, -14750849, 143820, 719639, 1295131, -2622027,
    -14265470, 43182731, 13362988, -204877764, 236455800, 1197935544,
    977943332, 1277754, -161884388, 52610037, 20128702, -14375311,
    526075, 615385, 1406598, -3337979, -13591652, 46766614,
    4107419, -206917480, 282476427, 1224179622, 932845357, -29898779,
    -150982921, 56338201, 16418772, -13879838, 852597, 518157,
    1510632, -4100942, -12695862, 50149526, -5841926, -207114528,
    330000850, 1246972748, 885981593, -58552597, -139414587, 59283192,
    12839695, -13280947, 1125322, 428835, 1604007, -4905663,
    -11568428, 53279596, -16433029, -205340251, 378826120, 1266179277,
    837613614, -84639171, -127325355, 61468691, 9418561, -12594979,
    1346738, 348031, 1683258, -5745741, -10201682, 56103972,
    -27604106, -201474517, 428735502, 1281684524, 788008216, -108132564,
    -114857086, 62924305, 6178818, -11837909, 1519791, 276112,
    1744713, -6613617, -8590209, 58569334, -39283634, -195407026,
    479499774, 1293395653, 737435476, -129025069, -102146538, 63684918,
    3140262, -11025188, 1647807, 213217, 1784537, -7500567,
    -6731094, 60622455, -51390474, -187038572, 530878646, 1301242396,
    686166796, -147326712, -89324475, 63790030, 319068, -10171587,
    1734402, 159286, 1798774, -8396718, -4624150, 62210788,
    -63834086, -176282254, 582622288, 1305177602, 634472973, -163064617,
    -76514848, 63283082, -2272133, -9291077, 1783403, 114078,
];

pub static SRC_INT32_21_4_3239_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_4_3239_5000",
    input_stride: 3,
    output_stride: 16,
    subfilter_count: 21,
    subfilter_length: 32,
    block_in: 4,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_4_3239_5000_FIR),
};

static SRC_INT32_21_4_3239_5000_FIR: [i32; 672] = [
    -58562, 431588, -1269437, 2211674, -2033047, -1172417,
    8921724, -20559015, 31618190, -33584791, 15972557, 29485554,
    -104143744, 199798291, -300846491, 398444653, 1768177661, 310464078,
    -275395710, 198001090, -112235984, 39763687, 7678019, -28757610,
    29932695, -20844784, 9964718, -2163521, -1413946, 1944649,
    -1203874, 434171, -49585, 420161, -1317727, 2458878,
    -2653694, -112743, 7688535, -19933478, 32865355, -38052029,
    24297787, 18395799, -94128912, 198531592, -322946437, 489261675,
    1759120683, 225974892, -247123877, 193286693, -118350352, 49101079,
    -460395, -23656670, 27850597, -20799539, 10809313, -3073661,
    -806220, 1663402, -1123432, 428686, -37413, 399226,
    -1346495, 2680658, -3265492, 1001353, 6276847, -18964596,
    33637973, -42075873, 32523581, 6640533, -82278243, 194094043,
    -341183812, 582216489, 1741091627, 145581973, -216571901, 185838080,
    -122462824, 57387005, -8323716, -18369465, 25418286, -20436871,
    11450784, -3892317, -218995, 1373435, -1030602, 416003,
    -21929, 368265, -1353693, 2871514, -3857632, 2154128,
    4701806, -17654227, 33906118, -45577035, 40517017, -5618850,
    -68709725, 186421467, -355071799, 676573661, 1714259333, 69834465,
    -184284923, 175870660, -124579957, 64530223, -15801052, -12983403,
    22685924, -19774816, 11887815, -4610925, 339417, 1080063,
    -927915, 397060, -3094, 326920, -1337528, 3026150,
    -4419052, 3328435, 2981899, -16009850, 33646874, -48481797,
    48144378, -18207684, -53571861, 175494994, -364155227, 771568435,
    1678874665, -779167, -150805557, 163628091, -124737793, 70459731,
    -22791024, -7584454, 19706527, -18835395, 12122382, -5222929,
    861617, 788336, -817897, 372834, 19049, 275018,
    -1296514, 3139582, -4938621, 4505946, 1138793, -14044658,
    32844954, -50723379, 55273237, -30940298, -37042470, 161343040,
    -368017063, 866414625, 1635267671, -65835310, -116667320, 149377851,
    -123000367, 75125192, -29203012, -2255869, 16535037, -17644115,
    12159576, -5723794, 1341193, 502966, -703021, 344325,
    44364, 212590, -1229522, 3207248, -5405327, 5667407,
    -802890, -11777567, 31493224, -52243243, 61774591, -43622538,
    -19327010, 144042700, -366284579, 960312840, 1583843851, -124978545,
    -82388368, 133406618, -119457845, 78497041, -34958200, 2923017,
    13227392, -16229434, 12007396, -6110984, 1772776, 228266,
    -585668, 312529, 72621, 139887, -1135824, 3225118,
    -5808473, 6792923, -2815859, -9233127, 29593113, -52992303,
    67524994, -56054487, -656441, 123720517, -358635121, 1052458954,
    1525079585, -177924142, -48465578, 116015533, -114224345, 80566275,
    -39990402, 7877887, 9839615, -14622191, 11676498, -6383912,
    2152074, -31903, -468085, 278420, 103489, 57392,
    -1015137, 3189790, -6137878, 7862258, -4870493, -6441336,
    27154893, -52932033, 72408695, -68033375, 18715372, 100552604,
    -344801376, 1142052722, 1459516763, -224459684, -15369065, 97515416,
    -107435466, 81343930, -44246668, 12540422, 6426932, -12855029,
    11179908, -6543856, 2475889, -274166, -352357, 242928,
    136533, -34171, -867657, 3098595, -6384084, 8855166,
    -6935233, -3437365, 24197832, -52035436, 76319701, -79356615,
    38514668, 74764091, -324576084, 1228306425, 1387756711, -264445815,
    16462812, 78221989, -99245582, 80860281, -47687670, 16849158,
    3042941, -10961811, 10532712, -6593849, 2742107, -495667,
    -240379, 206928, 171223, -133832, -694090, 2949683,
    -6538549, 9751730, -8977027, -261177, 20750205, -50287865,
    79163772, -89824939, 58451198, 46627895, -297816110, 1310453452,
    1310453452, -297816110, 46627895, 58451198, -89824939, 79163772,
    -50287865, 20750205, -261177, -8977027, 9751730, -6538549,
    2949683, -694090, -133832, 171223, 206928, -240379,
    -495667, 2742107, -6593849, 10532712, -10961811, 3042941,
    16849158, -47687670, 80860281, -99245582, 78221989, 16462812,
    -264445815, 1387756711, 1228306425, -324576084, 74764091, 38514668,
    -79356615, 76319701, -52035436, 24197832, -3437365, -6935233,
    8855166, -6384084, 3098595, -867657, -34171, 136533,
    242928, -352357, -274166, 2475889, -6543856, 11179908,
    -12855029, 6426932, 12540422, -44246668, 81343930, -107435466,
    97515416, -15369065, -224459684, 1459516763, 1142052722, -344801376,
    100552604, 18715372, -68033375, 72408695, -52932033, 27154893,
    -6441336, -4870493, 7862258, -6137878, 3189790, -1015137,
    57392, 103489, 278420, -468085, -31903, 2152074,
    -6383912, 11676498, -14622191, 9839615, 7877887, -39990402,
    80566275, -114224345, 116015533, -48465578, -177924142, 1525079585,
    1052458954, -358635121, 123720517, -656441, -56054487, 67524994,
    -52992303, 29593113, -9233127, -2815859, 6792923, -5808473,
    3225118, -1135824, 139887, 72621, 312529, -585668,
    228266, 1772776, -6110984, 12007396, -16229434, 13227392,
    2923017, -34958200, 78497041, -119457845, 133406618, -82388368,
    -124978545, 1583843851, 960312840, -366284579, 144042700, -19327010,
    -43622538, 61774591, -52243243, 31493224, -11777567, -802890,
    5667407, -5405327, 3207248, -1229522, 212590, 44364,
    344325, -703021, 502966, 1341193, -5723794, 12159576,
    -17644115, 16535037, -2255869, -29203012, 75125192, -123000367,
    149377851, -116667320, -65835310, 1635267671, 866414625, -368017063,
    161343040, -37042470, -30940298, 55273237, -50723379, 32844954,
    -14044658, 1138793, 4505946, -4938621, 3139582, -1296514,
    275018, 19049, 372834, -817897, 788336, 861617,
    -5222929, 12122382, -18835395, 19706527, -7584454, -22791024,
    70459731, -124737793, 163628091, -150805557, -779167, 1678874665,
    771568435, -364155227, 175494994, -53571861, -18207684, 48144378,
    -48481797, 33646874, -16009850, 2981899, 3328435, -4419052,
    3026150, -1337528, 326920, -3094, 397060, -927915,
    1080063, 339417, -4610925, 11887815, -19774816, 22685924,
    -12983403, -15801052, 64530223, -124579957, 175870660, -184284923,
    69834465, 1714259333, 676573661, -355071799, 186421467, -68709725,
    -5618850, 40517017, -45577035, 33906118, -17654227, 4701806,
    2154128, -3857632, 2871514, -1353693, 368265, -21929,
    416003, -1030602, 1373435, -218995, -3892317, 11450784,
    -20436871, 25418286, -18369465, -8323716, 57387005, -122462824,
    185838080, -216571901, 145581973, 1741091627, 582216489, -341183812,
    194094043, -82278243, 6640533, 32523581, -42075873, 33637973,
    -18964596, 6276847, 1001353, -3265492, 2680658, -1346495,
    399226, -37413, 428686, -1123432, 1663402, -806220,
    -3073661, 10809313, -20799539, 27850597, -23656670, -460395,
    49101079, -118350352, 193286693, -247123877, 225974892, 1759120683,
    489261675, -322946437, 198531592, -94128912, 18395799, 24297787,
    -38052029, 32865355, -19933478, 7688535, -112743, -2653694,
    2458878, -1317727, 420161, -49585, 434171, -1203874,
    1944649, -1413946, -2163521, 9964718, -20844784, 29932695,
    -28757610, 7678019, 39763687, -112235984, 198001090, -275395710,
    310464078, 1768177661, 398444653, -300846491, 199798291, -104143744,
    29485554, 15972557, -33584791, 31618190, -20559015, 8921724,
    -1172417, -2033047, 2211674, -1269437, 431588, -58562,
];

pub static SRC_INT32_21_5_1728_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_5_1728_5000",
    input_stride: 4,
    output_stride: 17,
    subfilter_count: 21,
    subfilter_length: 16,
    block_in: 5,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_5_1728_5000_FIR),
};

static SRC_INT32_21_5_1728_5000_FIR: [i32; 336] = [
    -228791, 2127306, 663680, -25192430, 55801590, 1015984,
    -237043581, 584085732, 1444170265, 521194550, -241359638, 14176507,
    50195360, -25245632, 1589547, 1818033, -258647, 2447720,
    -379967, -24807153, 61157077, -13065826, -229695396, 647422812,
    1438923431, 459116600, -242803254, 26329554, 44420878, -24992772,
    2396400, 1523764, -284784, 2774701, -1538184, -24066251,
    66176676, -27966483, -219174254, 710826626, 1428467186, 398204533,
    -241550821, 37405213, 38557157, -24461801, 3084822, 1247657,
    -305516, 3102969, -2805656, -22949152, 70773498, -43567487,
    -205360219, 773909204, 1412876035, 338793630, -237793178, 47349686,
    32678993, -23682104, 3657059, 992181, -319027, 3426558,
    -4174857, -21438786, 74859901, -59734676, -188156145, 836276917,
    1392260885, 281199335, -231733301, 56124964, 26856332, -22684000,
    4116834, 759149, -323398, 3738852, -5635963, -19522084,
    78348548, -76318803, -167489392, 897533721, 1366768031, 225715016,
    -223583937, 63708349, 21153721, -21498273, 4469164, 549751,
    -316641, 4032636, -7176803, -17190465, 81153527, -93156313,
    -143313365, 957284473, 1336577825, 172609968, -213565236, 70091825,
    15629872, -20155722, 4720175, 364601, -296736, 4300160,
    -8782833, -14440285, 83191523, -110070310, -115608826, 1015138275,
    1301903037, 122127684, -201902379, 75281305, 10337313, -18686751,
    4876903, 203787, -261678, 4533226, -10437155, -11273263,
    84383018, -126871715, -84384982, 1070711827, 1262986924, 74484402,
    -188823254, 79295759, 5322149, -17120985, 4947110, 66929,
    -209523, 4723281, -12120567, -7696844, 84653527, -143360605,
    -49680321, 1123632739, 1220101039, 29867939, -174556183, 82166242,
    623906, -15486926, 4939101, -46765, -138439, 4861538,
    -13811655, -3724522, 83934837, -159327727, -11563184, 1173542782,
    1173542782, -11563184, -159327727, 83934837, -3724522, -13811655,
    4861538, -138439, -46765, 4939101, -15486926, 623906,
    82166242, -174556183, 29867939, 1220101039, 1123632739, -49680321,
    -143360605, 84653527, -7696844, -12120567, 4723281, -209523,
    66929, 4947110, -17120985, 5322149, 79295759, -188823254,
    74484402, 1262986924, 1070711827, -84384982, -126871715, 84383018,
    -11273263, -10437155, 4533226, -261678, 203787, 4876903,
    -18686751, 10337313, 75281305, -201902379, 122127684, 1301903037,
    1015138275, -115608826, -110070310, 83191523, -14440285, -8782833,
    4300160, -296736, 364601, 4720175, -20155722, 15629872,
    70091825, -213565236, 172609968, 1336577825, 957284473, -143313365,
    -93156313, 81153527, -17190465, -7176803, 4032636, -316641,
    549751, 4469164, -21498273, 21153721, 63708349, -223583937,
    225715016, 1366768031, 897533721, -167489392, -76318803, 78348548,
    -19522084, -5635963, 3738852, -323398, 759149, 4116834,
    -22684000, 26856332, 56124964, -231733301, 281199335, 1392260885,
    836276917, -188156145, -59734676, 74859901, -21438786, -4174857,
    3426558, -319027, 992181, 3657059, -23682104, 32678993,
    47349686, -237793178, 338793630, 1412876035, 773909204, -205360219,
    -43567487, 70773498, -22949152, -2805656, 3102969, -305516,
    1247657, 3084822, -24461801, 38557157, 37405213, -241550821,
    398204533, 1428467186, 710826626, -219174254, -27966483, 66176676,
    -24066251, -1538184, 2774701, -284784, 1523764, 2396400,
    -24992772, 44420878, 26329554, -242803254, 459116600, 1438923431,
    647422812, -229695396, -13065826, 61157077, -24807153, -379967,
    2447720, -258647, 1818033, 1589547, -25245632, 50195360,
    14176507, -241359638, 521194550, 1444170265, 584085732, -237043581,
    1015984, 55801590, -25192430, 663680, 2127306, -228791,
];

pub static SRC_INT32_21_8_2160_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_8_2160_5000",
    input_stride: 3,
    output_stride: 8,
    subfilter_count: 21,
    subfilter_length: 20,
    block_in: 8,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_8_2160_5000_FIR),
};

static SRC_INT32_21_8_2160_5000_FIR: [i32; 420] = [
    -85450, 1417860, -3899377, 199335, 20775893, -51165578,
    43500166, 65899628, -288704178, 548299962, 1536831375, 477793711,
    -286497447, 79508190, 33419242, -48330765, 21761730, -1100625,
    -3377877, 1347495, -76028, 1471845, -4415861, 1604332,
    19446057, -53514410, 53592943, 50719824, -287469992, 619645323,
    1530704747, 408566116, -281079463, 91468284, 23470936, -45072384,
    22412824, -2285902, -2859424, 1263884, -60240, 1506269,
    -4918601, 3102423, 17767162, -55317699, 63570214, 34068959,
    -282587422, 691373968, 1518497827, 341036855, -272699155, 101725435,
    13768274, -41454754, 22742250, -3349133, -2351345, 1170069,
    -37379, 1517969, -5398298, 4679377, 15738674, -56519694,
    73299309, 16070123, -273873987, 763017593, 1500302849, 275602391,
    -261621671, 110247477, 4415546, -37543176, 22766500, -4285186,
    -1860181, 1068949, -6820, 1503856, -5845183, 6318727,
    13364875, -57069415, 82643658, -3131007, -261174795, 834099384,
    1476257075, 212632903, -248125252, 117023872, -4492536, -33403041,
    22505056, -5091073, -1391644, 963246, 31947, 1460987,
    -6249143, 8001858, 10655107, -56921595, 91464320, -23366746,
    -244364932, 904138119, 1446541500, 152469514, -232498066, 122064822,
    -12871527, -29098990, 21979945, -5765852, -950595, 855469,
    79296, 1386632, -6599852, 9708134, 7623943, -56037600,
    99621616, -44448254, -223351614, 972652369, 1411379152, 95421846,
    -215035038, 125400179, -20647778, -24694118, 21215290, -6310490,
    -541041, 747889, 135437, 1278347, -6886928, 11415065,
    4291311, -54386302, 106976841, -66166660, -198076053, 1039164740,
    1371032992, 41765925, -196034699, 127078182, -27758806, -20249249,
    20236852, -6727720, -166137, 642522, 200394, 1134049,
    -7100095, 13098510, 682536, -51944900, 113394055, -88294457,
    -168515037, 1103206128, 1325803457, -8257552, -175796102, 127164037,
    -34153508, -15822270, 19071578, -7021873, 171789, 541113,
    273982, 952091, -7229357, 14732924, -3171687, -48699678,
    118741913, -110587141, -134682177, 1164319936, 1276025647, -54444579,
    -154615829, 125738365, -39792226, -11467542, 17747167, -7198699,
    471204, 445135, 355783, 731331, -7265184, 16291636,
    -7235395, -44646667, 122895534, -132785118, -96628815, 1222066208,
    1222066208, -96628815, -132785118, 122895534, -44646667, -7235395,
    16291636, -7265184, 731331, 355783, 445135, 471204,
    -7198699, 17747167, -11467542, -39792226, 125738365, -154615829,
    -54444579, 1276025647, 1164319936, -134682177, -110587141, 118741913,
    -48699678, -3171687, 14732924, -7229357, 952091, 273982,
    541113, 171789, -7021873, 19071578, -15822270, -34153508,
    127164037, -175796102, -8257552, 1325803457, 1103206128, -168515037,
    -88294457, 113394055, -51944900, 682536, 13098510, -7100095,
    1134049, 200394, 642522, -166137, -6727720, 20236852,
    -20249249, -27758806, 127078182, -196034699, 41765925, 1371032992,
    1039164740, -198076053, -66166660, 106976841, -54386302, 4291311,
    11415065, -6886928, 1278347, 135437, 747889, -541041,
    -6310490, 21215290, -24694118, -20647778, 125400179, -215035038,
    95421846, 1411379152, 972652369, -223351614, -44448254, 99621616,
    -56037600, 7623943, 9708134, -6599852, 1386632, 79296,
    855469, -950595, -5765852, 21979945, -29098990, -12871527,
    122064822, -232498066, 152469514, 1446541500, 904138119, -244364932,
    -23366746, 91464320, -56921595, 10655107, 8001858, -6249143,
    1460987, 31947, 963246, -1391644, -5091073, 22505056,
    -33403041, -4492536, 117023872, -248125252, 212632903, 1476257075,
    834099384, -261174795, -3131007, 82643658, -57069415, 13364875,
    6318727, -5845183, 1503856, -6820, 1068949, -1860181,
    -4285186, 22766500, -37543176, 4415546, 110247477, -261621671,
    275602391, 1500302849, 763017593, -273873987, 16070123, 73299309,
    -56519694, 15738674, 4679377, -5398298, 1517969, -37379,
    1170069, -2351345, -3349133, 22742250, -41454754, 13768274,
    101725435, -272699155, 341036855, 1518497827, 691373968, -282587422,
    34068959, 63570214, -55317699, 17767162, 3102423, -4918601,
    1506269, -60240, 1263884, -2859424, -2285902, 22412824,
    -45072384, 23470936, 91468284, -281079463, 408566116, 1530704747,
    619645323, -287469992, 50719824, 53592943, -53514410, 19446057,
    1604332, -4415861, 1471845, -76028, 1347495, -3377877,
    -1100625, 21761730, -48330765, 33419242, 79508190, -286497447,
    477793711, 1536831375, 548299962, -288704178, 65899628, 43500166,
    -51165578, 20775893, 199335, -3899377, 1417860, -85450,
];

pub static SRC_INT32_21_8_3239_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_8_3239_5000",
    input_stride: 3,
    output_stride: 8,
    subfilter_count: 21,
    subfilter_length: 32,
    block_in: 8,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_8_3239_5000_FIR),
};

static SRC_INT32_21_8_3239_5000_FIR: [i32; 672] = [
    -58562, 431588, -1269437, 2211674, -2033047, -1172417,
    8921724, -20559015, 31618190, -33584791, 15972557, 29485554,
    -104143744, 199798291, -300846491, 398444653, 1768177661, 310464078,
    -275395710, 198001090, -112235984, 39763687, 7678019, -28757610,
    29932695, -20844784, 9964718, -2163521, -1413946, 1944649,
    -1203874, 434171, -49585, 420161, -1317727, 2458878,
    -2653694, -112743, 7688535, -19933478, 32865355, -38052029,
    24297787, 18395799, -94128912, 198531592, -322946437, 489261675,
    1759120683, 225974892, -247123877, 193286693, -118350352, 49101079,
    -460395, -23656670, 27850597, -20799539, 10809313, -3073661,
    -806220, 1663402, -1123432, 428686, -37413, 399226,
    -1346495, 2680658, -3265492, 1001353, 6276847, -18964596,
    33637973, -42075873, 32523581, 6640533, -82278243, 194094043,
    -341183812, 582216489, 1741091627, 145581973, -216571901, 185838080,
    -122462824, 57387005, -8323716, -18369465, 25418286, -20436871,
    11450784, -3892317, -218995, 1373435, -1030602, 416003,
    -21929, 368265, -1353693, 2871514, -3857632, 2154128,
    4701806, -17654227, 33906118, -45577035, 40517017, -5618850,
    -68709725, 186421467, -355071799, 676573661, 1714259333, 69834465,
    -184284923, 175870660, -124579957, 64530223, -15801052, -12983403,
    22685924, -19774816, 11887815, -4610925, 339417, 1080063,
    -927915, 397060, -3094, 326920, -1337528, 3026150,
    -4419052, 3328435, 2981899, -16009850, 33646874, -48481797,
    48144378, -18207684, -53571861, 175494994, -364155227, 771568435,
    1678874665, -779167, -150805557, 163628091, -124737793, 70459731,
    -22791024, -7584454, 19706527, -18835395, 12122382, -5222929,
    861617, 788336, -817897, 372834, 19049, 275018,
    -1296514, 3139582, -4938621, 4505946, 1138793, -14044658,
    32844954, -50723379, 55273237, -30940298, -37042470, 161343040,
    -368017063, 866414625, 1635267671, -65835310, -116667320, 149377851,
    -123000367, 75125192, -29203012, -2255869, 16535037, -17644115,
    12159576, -5723794, 1341193, 502966, -703021, 344325,
    44364, 212590, -1229522, 3207248, -5405327, 5667407,
    -802890, -11777567, 31493224, -52243243, 61774591, -43622538,
    -19327010, 144042700, -366284579, 960312840, 1583843851, -124978545,
    -82388368, 133406618, -119457845, 78497041, -34958200, 2923017,
    13227392, -16229434, 12007396, -6110984, 1772776, 228266,
    -585668, 312529, 72621, 139887, -1135824, 3225118,
    -5808473, 6792923, -2815859, -9233127, 29593113, -52992303,
    67524994, -56054487, -656441, 123720517, -358635121, 1052458954,
    1525079585, -177924142, -48465578, 116015533, -114224345, 80566275,
    -39990402, 7877887, 9839615, -14622191, 11676498, -6383912,
    2152074, -31903, -468085, 278420, 103489, 57392,
    -1015137, 3189790, -6137878, 7862258, -4870493, -6441336,
    27154893, -52932033, 72408695, -68033375, 18715372, 100552604,
    -344801376, 1142052722, 1459516763, -224459684, -15369065, 97515416,
    -107435466, 81343930, -44246668, 12540422, 6426932, -12855029,
    11179908, -6543856, 2475889, -274166, -352357, 242928,
    136533, -34171, -867657, 3098595, -6384084, 8855166,
    -6935233, -3437365, 24197832, -52035436, 76319701, -79356615,
    38514668, 74764091, -324576084, 1228306425, 1387756711, -264445815,
    16462812, 78221989, -99245582, 80860281, -47687670, 16849158,
    3042941, -10961811, 10532712, -6593849, 2742107, -495667,
    -240379, 206928, 171223, -133832, -694090, 2949683,
    -6538549, 9751730, -8977027, -261177, 20750205, -50287865,
    79163772, -89824939, 58451198, 46627895, -297816110, 1310453452,
    1310453452, -297816110, 46627895, 58451198, -89824939, 79163772,
    -50287865, 20750205, -261177, -8977027, 9751730, -6538549,
    2949683, -694090, -133832, 171223, 206928, -240379,
    -495667, 2742107, -6593849, 10532712, -10961811, 3042941,
    16849158, -47687670, 80860281, -99245582, 78221989, 16462812,
    -264445815, 1387756711, 1228306425, -324576084, 74764091, 38514668,
    -79356615, 76319701, -52035436, 24197832, -3437365, -6935233,
    8855166, -6384084, 3098595, -867657, -34171, 136533,
    242928, -352357, -274166, 2475889, -6543856, 11179908,
    -12855029, 6426932, 12540422, -44246668, 81343930, -107435466,
    97515416, -15369065, -224459684, 1459516763, 1142052722, -344801376,
    100552604, 18715372, -68033375, 72408695, -52932033, 27154893,
    -6441336, -4870493, 7862258, -6137878, 3189790, -1015137,
    57392, 103489, 278420, -468085, -31903, 2152074,
    -6383912, 11676498, -14622191, 9839615, 7877887, -39990402,
    80566275, -114224345, 116015533, -48465578, -177924142, 1525079585,
    1052458954, -358635121, 123720517, -656441, -56054487, 67524994,
    -52992303, 29593113, -9233127, -2815859, 6792923, -5808473,
    3225118, -1135824, 139887, 72621, 312529, -585668,
    228266, 1772776, -6110984, 12007396, -16229434, 13227392,
    2923017, -34958200, 78497041, -119457845, 133406618, -82388368,
    -124978545, 1583843851, 960312840, -366284579, 144042700, -19327010,
    -43622538, 61774591, -52243243, 31493224, -11777567, -802890,
    5667407, -5405327, 3207248, -1229522, 212590, 44364,
    344325, -703021, 502966, 1341193, -5723794, 12159576,
    -17644115, 16535037, -2255869, -29203012, 75125192, -123000367,
    149377851, -116667320, -65835310, 1635267671, 866414625, -368017063,
    161343040, -37042470, -30940298, 55273237, -50723379, 32844954,
    -14044658, 1138793, 4505946, -4938621, 3139582, -1296514,
    275018, 19049, 372834, -817897, 788336, 861617,
    -5222929, 12122382, -18835395, 19706527, -7584454, -22791024,
    70459731, -124737793, 163628091, -150805557, -779167, 1678874665,
    771568435, -364155227, 175494994, -53571861, -18207684, 48144378,
    -48481797, 33646874, -16009850, 2981899, 3328435, -4419052,
    3026150, -1337528, 326920, -3094, 397060, -927915,
    1080063, 339417, -4610925, 11887815, -19774816, 22685924,
    -12983403, -15801052, 64530223, -124579957, 175870660, -184284923,
    69834465, 1714259333, 676573661, -355071799, 186421467, -68709725,
    -5618850, 40517017, -45577035, 33906118, -17654227, 4701806,
    2154128, -3857632, 2871514, -1353693, 368265, -21929,
    416003, -1030602, 1373435, -218995, -3892317, 11450784,
    -20436871, 25418286, -18369465, -8323716, 57387005, -122462824,
    185838080, -216571901, 145581973, 1741091627, 582216489, -341183812,
    194094043, -82278243, 6640533, 32523581, -42075873, 33637973,
    -18964596, 6276847, 1001353, -3265492, 2680658, -1346495,
    399226, -37413, 428686, -1123432, 1663402, -806220,
    -3073661, 10809313, -20799539, 27850597, -23656670, -460395,
    49101079, -118350352, 193286693, -247123877, 225974892, 1759120683,
    489261675, -322946437, 198531592, -94128912, 18395799, 24297787,
    -38052029, 32865355, -19933478, 7688535, -112743, -2653694,
    2458878, -1317727, 420161, -49585, 434171, -1203874,
    1944649, -1413946, -2163521, 9964718, -20844784, 29932695,
    -28757610, 7678019, 39763687, -112235984, 198001090, -275395710,
    310464078, 1768177661, 398444653, -300846491, 199798291, -104143744,
    29485554, 15972557, -33584791, 31618190, -20559015, 8921724,
    -1172417, -2033047, 2211674, -1269437, 431588, -58562,
];

pub static SRC_INT32_21_8_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_8_4535_5000",
    input_stride: 3,
    output_stride: 8,
    subfilter_count: 21,
    subfilter_length: 108,
    block_in: 8,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_8_4535_5000_FIR),
};

static SRC_INT32_21_8_4535_5000_FIR: [i32; 2268] = [
    -34117, 57521, -86388, 119666, -155365, 190401,
    -220499, 240141, -242608, 220098, -163958, 65028,
    85914, -297585, 577542, -931448, 1362287, -1869564,
    2448515, -3089395, 3776867, -4489541, 5199718, -5873370,
    6470384, -6945102, 7247160, -7322629, 7115441, -6569065,
    5628394, -4241777, 2363128, 45970, -3014254, 6558959,
    -10684276, 15380182, -20621729, 26368872, -32566915, 39147648,
    -46031270, 53129226, -60348176, 67595562, -74787673, 81862299,
    -88800921, 95673544, -102745848, 110795367, -122377747, 150858204,
    2045888672, 49804281, -73608114, 80171384, -81694468, 80716920,
    -78150255, 74446659, -69891511, 64699198, -59049485, 53102194,
    -47002911, 40884680, -34867877, 29059353, -23551374, 18420701,
    -13727969, 9517468, -5817357, 2640322, 15364, -2164423,
    3832856, -5056024, 5876592, -6342426, 6504519, -6415032,
    6125491, -5685214, 5139993, -4531066, 3894371, -3260103,
    2652540, -2090125, 1585755, -1147259, 778004, -477590,
    242595, -67329, -55445, 133844, -176279, 190961,
    -185517, 166710, -140259, 110755, -81659, 55370,
    -34189, 58534, -89466, 126359, -167673, 210770,
    -251776, 285491, -305368, 303581, -271206, 198500,
    -75308, -108411, 361951, -693131, 1107488, -1607434,
    2191401, -2853023, 3580402, -4355491, 5153669, -5943518,
    6686863, -7339100, 7849823, -8163771, 8222062, -7963731,
    7327486, -6253667, 4686318, -2575296, -121675, 3437105,
    -7392110, 11995159, -17241334, 23112218, -29576574, 36592016,
    -44107940, 52070177, -60428155, 69146069, -78221115, 87715388,
    -97817115, 108972425, -122213025, 140147951, -171030074, 259078152,
    2032024619, -43211863, -25641661, 48914492, -59514759, 64434306,
    -66106653, 65641216, -63651310, 60532438, -56572773, 52001880,
    -47013531, 41776576, -36439980, 31134925, -25975468, 21058582,
    -16464031, 12254358, -8475129, 5155511, -2309198, -64324,
    1978214, -3456478, 4532005, -5244516, 5638491, -5761167,
    5660660, -5384266, 4977000, -4480391, 3931556, -3362566,
    2800080, -2265245, 1773828, -1336540, 959518, -644929,
    391637, -195908, 52109, 46627, -107803, 139036,
    -147634, 140267, -122744, 99878, -75438, 52175,
    -33513, 58336, -90766, 130619, -176841, 227300,
    -278606, 325980, -363178, 382510, -374947, 330352,
    -237827, 86190, 135425, -436861, 826125, -1308520,
    1885736, -2554949, 3307968, -4130488, 5001483, -5892799,
    6768985, -7587397, 8298603, -8847108, 9172389, -9210239,
    8894375, -8158278, 6937183, -5170154, 2802138, 214098,
    -3916292, 8331380, -13474746, 19350183, -25950820, 33261310,
    -41261773, 49934255, -59273084, 69301709, -80101275, 91862277,
    -104986231, 120308518, -139660498, 167594891, -218603609, 373471948,
    2004465813, -127448891, 20655689, 17655459, -36673702, 47177133,
    -52935304, 55643933, -56211108, 55195342, -52981982, 49862585,
    -46073295, 41814147, -37258872, 32559770, -27849977, 23244409,
    -18840107, 14716410, -10935205, 7541408, -4563733, 2015772,
    102626, -1803717, 3110031, -4052408, 4667978, -4998152,
    5086698, -4977968, 4715306, -4339706, 3888715, -3395626,
    2888927, -2392028, 1923223, -1495864, 1118711, -796425,
    530154, -318171, 156541, -39765, -38617, 85485,
    -107690, 111683, -103248, 87322, -67906, 48047,
    -32061, 56880, -90194, 132276, -182585, 239543,
    -300318, 360652, -414733, 455156, -472968, 457832,
    -398314, 282300, -97549, -167631, 523585, -978432,
    1537120, -2200456, 2964160, -3817988, 4744966, -5720798,
    6713493, -7683241, 8582589, -9356927, 9945296, -10281522,
    10295638, -9915559, 9068966, -7685288, 5697730, -3045190,
    -326037, 4460942, -9395054, 15154497, -21757146, 29215336,
    -37540769, 46752738, -56891607, 68041255, -80367935, 94191763,
    -110129372, 129410128, -154682224, 192518400, -264110458, 492938961,
    1963548390, -202303764, 64484907, -12994162, -13640119, 29309228,
    -38919395, 44673663, -47737074, 48810255, -48362742, 46739177,
    -44211455, 41005558, -37315675, 33311588, -29142417, 24938395,
    -20811641, 16856490, -13149737, 9750999, -6703303, 4033957,
    -1755720, -131760, 1640284, -2791264, 3613794, -4142677,
    4416499, -4475805, 4361421, -4112995, 3767756, -3359543,
    2918095, -2468599, 2031488, -1622465, 1252714, -929272,
    655520, -431754, 255792, -123595, 29860, 31433,
    -66549, 81598, -82226, 73399, -59269, 43113,
    -29825, 54141, -87694, 131210, -184684, 247128,
    -316334, 388654, -458829, 519888, -563132, 578228,
    -553424, 475904, -332279, 109222, 205771, -623503,
    1152111, -1796058, 2555098, -3423289, 4388088, -5429582,
    6519911, -7622927, 8694126, -9680893, 10523063, -11153819,
    11500894, -11488067, 11036873, -10068481, 8505629, -6274503,
    3306416, 460879, -5082478, 10606472, -17075341, 24529135,
    -33011304, 42578584, -53317472, 65372054, -78992867, 94627841,
    -113105546, 136045016, -166910337, 214329403, -306551725, 616283869,
    1909770429, -267317436, 105124766, -42452888, 9124430, 11199426,
    -24354196, 32965479, -38413885, 41519073, -42820397, 42705762,
    -41475548, 39375978, -36617000, 33381907, -29832397, 26111095,
    -22342697, 18634442, -15076321, 11741307, -8685746, 5950001,
    -3559377, 1525339, 153033, -1487371, 2498214, -3213116,
    3664755, -3889092, 3923646, -3805938, 3572145, -3255978,
    2887823, -2494128, 2097043, -1714285, 1359218, -1041090,
    765427, -534515, 347950, -203215, 96253, -22010,
    -25078, 50664, -60152, 58440, -49745, 37512,
    -26815, 50126, -83248, 127357, -182987, 249773,
    -326180, 409250, -494389, 575204, -643424, 688923,
    -699863, 662970, -563962, 388121, -121011, -250665,
    738109, -1349383, 2088320, -2953442, 3936928, -5023687,
    6190589, -7405906, 8629005, -9810345, 10891777, -11807187,
    12483462, -12841755, 12799014, -12269692, 11167568, -9407541,
    6907253, -3588362, -622794, 5795442, -11995982, 19291611,
    -27756978, 37485610, -48609149, 61330241, -75980850, 93131786,
    -113815166, 140025848, -176023335, 232479601, -344933482, 742232045,
    1843784725, -322178269, 141941188, -70179310, 31174406, -6785775,
    -9541005, 20765739, -28440774, 33480144, -36477649, 37853968,
    -37930248, 36966900, -35184661, 32776121, -29911916, 26743899,
    -23406608, 20017834, -16678797, 13474219, -10472508, 7726152,
    -5272393, 3134186, -1321423, -167595, 1344509, -2229136,
    2847641, -3230723, 3411876, -3425771, 3306819, -3087937,
    2799551, -2468833, 2119196, -1770003, 1436507, -1129966,
    857917, -624569, 431284, -277095, 159258, -73772,
    15872, 19536, -37509, 42784, -39565, 31391,
    -23055, 44866, -76881, 120708, -177421, 247292,
    -329498, 421843, -520493, 619768, -711994, 787455,
    -834460, 839536, -787780, 663360, -450179, 132679,
    303212, -869030, 1572650, -2417130, 3399573, -4510057,
    5730688, -7034835, 8386590, -9740510, 11041654, -12225958,
    13220938, -13946706, 14317280, -14242098, 13627684, -12379318,
    10402575, -7604529, 3894355, 817017, -6618704, 13603867,
    -21877104, 31567217, -42848939, 55980384, -71370042, 89703516,
    -112202787, 141214860, -181753556, 246473134, -378283049, 869446318,
    1766389312, -366723170, 174394889, -95681109, 52088557, -24289378,
    5218936, 8327007, -18027345, 24864891, -29471891, 32290911,
    -33655874, 33835131, -33055077, 31513238, -29385396, 26829304,
    -23986417, 20982537, -17927924, 14917213, -12029379, 9327872,
    -6861022, 4662713, -2753366, 1141169, 176465, -1211281,
    1982465, -2514889, 2837388, -2981119, 2978061, -2859693,
    2655873, -2393959, 2098147, -1789049, 1483488, -1194486,
    931422, -700325, 504272, -343853, 217670, -122840,
    55480, -11148, -14777, 26778, -28964, 24903,
    -18593, 38424, -68659, 111314, -167991, 239601,
    -326062, 425988, -536397, 652440, -767199, 871568,
    -954233, 1001787, -998998, 929223, -775000, 518803,
    -143940, -364404, 1018028, -1824509, 2785978, -3897927,
    5148105, -6515558, 7969869, -9470643, 10967287, -12399100,
    13695702, -14777786, 15558169, -15943092, 15833687, -15127501,
    13719909, -11505231, 8377257, -4228801, -1050254, 7577273,
    -15484851, 24934721, -36141584, 49414536, -65231672, 84382195,
    -108259000, 139527636, -183893801, 255877615, -405665320, 996544875,
    1678515915, -400936454, 202047257, -118522937, 71477540, -40970735,
    19630415, -4097079, -7389241, 15854203, -21952271, 26136862,
    -28746603, 30051485, -30278391, 29625364, -28269474, 26370953,
    -24075133, 21513135, -18801903, 16043961, -13327151, 10724510,
    -8294383, 6080816, -4114258, 2412540, -982107, -180549,
    1087310, -1756776, 2212590, -2481806, 2593360, -2576679,
    2460474, -2271738, 2034969, -1771607, 1499698, -1233752,
    984786, -760509, 565636, -402281, 270402, -168278,
    92973, -40773, 7578, 10760, -18178, 18200,
    -13492, 30889, -58691, 99287, -154784, 226723,
    -315776, 421408, -541553, 672303, -807644, 939262,
    -1056453, 1146144, -1193068, 1180095, -1088734, 899816,
    -594336, 154464, 435327, -1187022, 2107784, -3198662,
    4453342, -5857023, 7385433, -9004090, 10667802, -12320492,
    13895330, -15315208, 16493514, -17335187, 17737963, -17593709,
    16789701, -15209616, 12733976, -9239617, 4597606, 1331302,
    -8705096, 17715286, -28612418, 41750725, -57669066, 77246062,
    -102021451, 134935914, -182302940, 260334326, -426198862, 1122120025,
    1581216498, -424946475, 224564365, -138333041, 88990761, -56511949,
    33410017, -16256886, 3256263, 6634687, -14076551, 19522678,
    -23308424, 25699214, -26917316, 27156922, -26592545, 25383457,
    -23675771, 21603147, -19286742, 16834796, -14342155, 11889878,
    -9545061, 7360943, -5377306, 3621185, -2107853, 842042,
    180653, -972243, 1550754, -1938637, 2161238, -2245369,
    2218032, -2105331, 1931573, -1718599, 1485307, -1247395,
    1017283, -804191, 614358, -451363, 316507, -209249,
    127642, -68763, 29109, -4939, -7437, 11434,
    -7833, 22380, -47127, 84798, -137969, 208793,
    -298690, 407999, -535625, 678689, -832209, 988842,
    -1138708, 1269334, -1365721, 1410586, -1384768, 1267817,
    -1038773, 677116, -163867, -517172, 1378101, -2425549,
    3659327, -5071132, 6643385, -8348258, 10146924, -11989101,
    13812898, -15544990, 17101114, -18386842, 19298593, -19724750,
    19546767, -18640037, 16874234, -14112710, 10210335, -5008818,
    -1672003, 10049521, -20405060, 33130892, -48816009, 68411463,
    -93574923, 127469331, -176910384, 259567368, -439071528, 1244757558,
    1475648127, -439020122, 241719131, -154808541, 104322337, -70623713,
    46291559, -27911713, 13694630, -2605152, -6007836, 12587046,
    -17456872, 20872192, -23045739, 24163630, -24394072, 23891988,
    -22801193, 21255077, -19376467, 17277052, -15056687, 12802737,
    -10589625, 8478628, -6517985, 4743319, -3178348, 1835880,
    -719012, -177494, 865741, -1363172, 1691070, -1873126,
    1934117, -1898747, 1790659, -1631653, 1441103, -1235573,
    1028624, -830790, 649696, -490296, 355194, -245023,
    158851, -94594, 49401, -20007, 3039, 4750,
    -1715, 13041, -34157, 68075, -117796, 186052,
    -274994, 385840, -518501, 671195, -840085, 1018954,
    -1198956, 1368467, -1513061, 1615643, -1656754, 1615060,
    -1468044, 1192877, -767474, 171710, 611253, -1593551,
    2781169, -4172532, 5757166, -7514512, 9412950, -11409058,
    13447180, -15459302, 17365245, -19073160, 20480268, -21473752,
    21931670, -21723676, 20711266, -18747121, 15672914, -11314598,
    5473606, 2088772, -11678720, 23718327, -38834468, 58031106,
    -83050488, 117216064, -167719309, 253391594, -443555299, 1363056377,
    1363056377, -443555299, 253391594, -167719309, 117216064, -83050488,
    58031106, -38834468, 23718327, -11678720, 2088772, 5473606,
    -11314598, 15672914, -18747121, 20711266, -21723676, 21931670,
    -21473752, 20480268, -19073160, 17365245, -15459302, 13447180,
    -11409058, 9412950, -7514512, 5757166, -4172532, 2781169,
    -1593551, 611253, 171710, -767474, 1192877, -1468044,
    1615060, -1656754, 1615643, -1513061, 1368467, -1198956,
    1018954, -840085, 671195, -518501, 385840, -274994,
    186052, -117796, 68075, -34157, 13041, -1715,
    4750, 3039, -20007, 49401, -94594, 158851,
    -245023, 355194, -490296, 649696, -830790, 1028624,
    -1235573, 1441103, -1631653, 1790659, -1898747, 1934117,
    -1873126, 1691070, -1363172, 865741, -177494, -719012,
    1835880, -3178348, 4743319, -6517985, 8478628, -10589625,
    12802737, -15056687, 17277052, -19376467, 21255077, -22801193,
    23891988, -24394072, 24163630, -23045739, 20872192, -17456872,
    12587046, -6007836, -2605152, 13694630, -27911713, 46291559,
    -70623713, 104322337, -154808541, 241719131, -439020122, 1475648127,
    1244757558, -439071528, 259567368, -176910384, 127469331, -93574923,
    68411463, -48816009, 33130892, -20405060, 10049521, -1672003,
    -5008818, 10210335, -14112710, 16874234, -18640037, 19546767,
    -19724750, 19298593, -18386842, 17101114, -15544990, 13812898,
    -11989101, 10146924, -8348258, 6643385, -5071132, 3659327,
    -2425549, 1378101, -517172, -163867, 677116, -1038773,
    1267817, -1384768, 1410586, -1365721, 1269334, -1138708,
    988842, -832209, 678689, -535625, 407999, -298690,
    208793, -137969, 84798, -47127, 22380, -7833,
    11434, -7437, -4939, 29109, -68763, 127642,
    -209249, 316507, -451363, 614358, -804191, 1017283,
    -1247395, 1485307, -1718599, 1931573, -2105331, 2218032,
    -2245369, 2161238, -1938637, 1550754, -972243, 180653,
    842042, -2107853, 3621185, -5377306, 7360943, -9545061,
    11889878, -14342155, 16834796, -19286742, 21603147, -23675771,
    25383457, -26592545, 27156922, -26917316, 25699214, -23308424,
    19522678, -14076551, 6634687, 3256263, -16256886, 33410017,
    -56511949, 88990761, -138333041, 224564365, -424946475, 1581216498,
    1122120025, -426198862, 260334326, -182302940, 134935914, -102021451,
    77246062, -57669066, 41750725, -28612418, 17715286, -8705096,
    1331302, 4597606, -9239617, 12733976, -15209616, 16789701,
    -17593709, 17737963, -17335187, 16493514, -15315208, 13895330,
    -12320492, 10667802, -9004090, 7385433, -5857023, 4453342,
    -3198662, 2107784, -1187022, 435327, 154464, -594336,
    899816, -1088734, 1180095, -1193068, 1146144, -1056453,
    939262, -807644, 672303, -541553, 421408, -315776,
    226723, -154784, 99287, -58691, 30889, -13492,
    18200, -18178, 10760, 7578, -40773, 92973,
    -168278, 270402, -402281, 565636, -760509, 984786,
    -1233752, 1499698, -1771607, 2034969, -2271738, 2460474,
    -2576679, 2593360, -2481806, 2212590, -1756776, 1087310,
    -180549, -982107, 2412540, -4114258, 6080816, -8294383,
    10724510, -13327151, 16043961, -18801903, 21513135, -24075133,
    26370953, -28269474, 29625364, -30278391, 30051485, -28746603,
    26136862, -21952271, 15854203, -7389241, -4097079, 19630415,
    -40970735, 71477540, -118522937, 202047257, -400936454, 1678515915,
    996544875, -405665320, 255877615, -183893801, 139527636, -108259000,
    84382195, -65231672, 49414536, -36141584, 24934721, -15484851,
    7577273, -1050254, -4228801, 8377257, -11505231, 13719909,
    -15127501, 15833687, -15943092, 15558169, -14777786, 13695702,
    -12399100, 10967287, -9470643, 7969869, -6515558, 5148105,
    -3897927, 2785978, -1824509, 1018028, -364404, -143940,
    518803, -775000, 929223, -998998, 1001787, -954233,
    871568, -767199, 652440, -536397, 425988, -326062,
    239601, -167991, 111314, -68659, 38424, -18593,
    24903, -28964, 26778, -14777, -11148, 55480,
    -122840, 217670, -343853, 504272, -700325, 931422,
    -1194486, 1483488, -1789049, 2098147, -2393959, 2655873,
    -2859693, 2978061, -2981119, 2837388, -2514889, 1982465,
    -1211281, 176465, 1141169, -2753366, 4662713, -6861022,
    9327872, -12029379, 14917213, -17927924, 20982537, -23986417,
    26829304, -29385396, 31513238, -33055077, 33835131, -33655874,
    32290911, -29471891, 24864891, -18027345, 8327007, 5218936,
    -24289378, 52088557, -95681109, 174394889, -366723170, 1766389312,
    869446318, -378283049, 246473134, -181753556, 141214860, -112202787,
    89703516, -71370042, 55980384, -42848939, 31567217, -21877104,
    13603867, -6618704, 817017, 3894355, -7604529, 10402575,
    -12379318, 13627684, -14242098, 14317280, -13946706, 13220938,
    -12225958, 11041654, -9740510, 8386590, -7034835, 5730688,
    -4510057, 3399573, -2417130, 1572650, -869030, 303212,
    132679, -450179, 663360, -787780, 839536, -834460,
    787455, -711994, 619768, -520493, 421843, -329498,
    247292, -177421, 120708, -76881, 44866, -23055,
    31391, -39565, 42784, -37509, 19536, 15872,
    -73772, 159258, -277095, 431284, -624569, 857917,
    -1129966, 1436507, -1770003, 2119196, -2468833, 2799551,
    -3087937, 3306819, -3425771, 3411876, -3230723, 2847641,
    -2229136, 1344509, -167595, -1321423, 3134186, -5272393,
    7726152, -10472508, 13474219, -16678797, 20017834, -23406608,
    26743899, -29911916, 32776121, -35184661, 36966900, -37930248,
    37853968, -36477649, 33480144, -28440774, 20765739, -9541005,
    -6785775, 31174406, -70179310, 141941188, -322178269, 1843784725,
    742232045, -344933482, 232479601, -176023335, 140025848, -113815166,
    93131786, -75980850, 61330241, -48609149, 37485610, -27756978,
    19291611, -11995982, 5795442, -622794, -3588362, 6907253,
    -9407541, 11167568, -12269692, 12799014, -12841755, 12483462,
    -11807187, 10891777, -9810345, 8629005, -7405906, 6190589,
    -5023687, 3936928, -2953442, 2088320, -1349383, 738109,
    -250665, -121011, 388121, -563962, 662970, -699863,
    688923, -643424, 575204, -494389, 409250, -326180,
    249773, -182987, 127357, -83248, 50126, -26815,
    37512, -49745, 58440, -60152, 50664, -25078,
    -22010, 96253, -203215, 347950, -534515, 765427,
    -1041090, 1359218, -1714285, 2097043, -2494128, 2887823,
    -3255978, 3572145, -3805938, 3923646, -3889092, 3664755,
    -3213116, 2498214, -1487371, 153033, 1525339, -3559377,
    5950001, -8685746, 11741307, -15076321, 18634442, -22342697,
    26111095, -29832397, 33381907, -36617000, 39375978, -41475548,
    42705762, -42820397, 41519073, -38413885, 32965479, -24354196,
    11199426, 9124430, -42452888, 105124766, -267317436, 1909770429,
    616283869, -306551725, 214329403, -166910337, 136045016, -113105546,
    94627841, -78992867, 65372054, -53317472, 42578584, -33011304,
    24529135, -17075341, 10606472, -5082478, 460879, 3306416,
    -6274503, 8505629, -10068481, 11036873, -11488067, 11500894,
    -11153819, 10523063, -9680893, 8694126, -7622927, 6519911,
    -5429582, 4388088, -3423289, 2555098, -1796058, 1152111,
    -623503, 205771, 109222, -332279, 475904, -553424,
    578228, -563132, 519888, -458829, 388654, -316334,
    247128, -184684, 131210, -87694, 54141, -29825,
    43113, -59269, 73399, -82226, 81598, -66549,
    31433, 29860, -123595, 255792, -431754, 655520,
    -929272, 1252714, -1622465, 2031488, -2468599, 2918095,
    -3359543, 3767756, -4112995, 4361421, -4475805, 4416499,
    -4142677, 3613794, -2791264, 1640284, -131760, -1755720,
    4033957, -6703303, 9750999, -13149737, 16856490, -20811641,
    24938395, -29142417, 33311588, -37315675, 41005558, -44211455,
    46739177, -48362742, 48810255, -47737074, 44673663, -38919395,
    29309228, -13640119, -12994162, 64484907, -202303764, 1963548390,
    492938961, -264110458, 192518400, -154682224, 129410128, -110129372,
    94191763, -80367935, 68041255, -56891607, 46752738, -37540769,
    29215336, -21757146, 15154497, -9395054, 4460942, -326037,
    -3045190, 5697730, -7685288, 9068966, -9915559, 10295638,
    -10281522, 9945296, -9356927, 8582589, -7683241, 6713493,
    -5720798, 4744966, -3817988, 2964160, -2200456, 1537120,
    -978432, 523585, -167631, -97549, 282300, -398314,
    457832, -472968, 455156, -414733, 360652, -300318,
    239543, -182585, 132276, -90194, 56880, -32061,
    48047, -67906, 87322, -103248, 111683, -107690,
    85485, -38617, -39765, 156541, -318171, 530154,
    -796425, 1118711, -1495864, 1923223, -2392028, 2888927,
    -3395626, 3888715, -4339706, 4715306, -4977968, 5086698,
    -4998152, 4667978, -4052408, 3110031, -1803717, 102626,
    2015772, -4563733, 7541408, -10935205, 14716410, -18840107,
    23244409, -27849977, 32559770, -37258872, 41814147, -46073295,
    49862585, -52981982, 55195342, -56211108, 55643933, -52935304,
    47177133, -36673702, 17655459, 20655689, -127448891, 2004465813,
    373471948, -218603609, 167594891, -139660498, 120308518, -104986231,
    91862277, -80101275, 69301709, -59273084, 49934255, -41261773,
    33261310, -25950820, 19350183, -13474746, 8331380, -3916292,
    214098, 2802138, -5170154, 6937183, -8158278, 8894375,
    -9210239, 9172389, -8847108, 8298603, -7587397, 6768985,
    -5892799, 5001483, -4130488, 3307968, -2554949, 1885736,
    -1308520, 826125, -436861, 135425, 86190, -237827,
    330352, -374947, 382510, -363178, 325980, -278606,
    227300, -176841, 130619, -90766, 58336, -33513,
    52175, -75438, 99878, -122744, 140267, -147634,
    139036, -107803, 46627, 52109, -195908, 391637,
    -644929, 959518, -1336540, 1773828, -2265245, 2800080,
    -3362566, 3931556, -4480391, 4977000, -5384266, 5660660,
    -5761167, 5638491, -5244516, 4532005, -3456478, 1978214,
    -64324, -2309198, 5155511, -8475129, 12254358, -16464031,
    21058582, -25975468, 31134925, -36439980, 41776576, -47013531,
    52001880, -56572773, 60532438, -63651310, 65641216, -66106653,
    64434306, -59514759, 48914492, -25641661, -43211863, 2032024619,
    259078152, -171030074, 140147951, -122213025, 108972425, -97817115,
    87715388, -78221115, 69146069, -60428155, 52070177, -44107940,
    36592016, -29576574, 23112218, -17241334, 11995159, -7392110,
    3437105, -121675, -2575296, 4686318, -6253667, 7327486,
    -7963731, 8222062, -8163771, 7849823, -7339100, 6686863,
    -5943518, 5153669, -4355491, 3580402, -2853023, 2191401,
    -1607434, 1107488, -693131, 361951, -108411, -75308,
    198500, -271206, 303581, -305368, 285491, -251776,
    210770, -167673, 126359, -89466, 58534, -34189,
    55370, -81659, 110755, -140259, 166710, -185517,
    190961, -176279, 133844, -55445, -67329, 242595,
    -477590, 778004, -1147259, 1585755, -2090125, 2652540,
    -3260103, 3894371, -4531066, 5139993, -5685214, 6125491,
    -6415032, 6504519, -6342426, 5876592, -5056024, 3832856,
    -2164423, 15364, 2640322, -5817357, 9517468, -13727969,
    18420701, -23551374, 29059353, -34867877, 40884680, -47002911,
    53102194, -59049485, 64699198, -69891511, 74446659, -78150255,
    80716920, -81694468, 80171384, -73608114, 49804281, 2045888672,
    150858204, -122377747, 110795367, -102745848, 95673544, -88800921,
    81862299, -74787673, 67595562, -60348176, 53129226, -46031270,
    39147648, -32566915, 26368872, -20621729, 15380182, -10684276,
    6558959, -3014254, 45970, 2363128, -4241777, 5628394,
    -6569065, 7115441, -7322629, 7247160, -6945102, 6470384,
    -5873370, 5199718, -4489541, 3776867, -3089395, 2448515,
    -1869564, 1362287, -931448, 577542, -297585, 85914,
    65028, -163958, 220098, -242608, 240141, -220499,
    190401, -155365, 119666, -86388, 57521, -34117,
];

pub static SRC_INT32_21_10_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_10_2500_5000",
    input_stride: 9,
    output_stride: 19,
    subfilter_count: 21,
    subfilter_length: 24,
    block_in: 10,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_10_2500_5000_FIR),
};

static SRC_INT32_21_10_2500_5000_FIR: [i32; 504] = [
    9085, 624791, -2843036, 5010633, -767253, -16812985,
    43311005, -53024344, 6373637, 121718397, -312445120, 509581651,
    1609744796, 433153198, -303596890, 133056200, -6233982, -46318530,
    42260364, -18306021, 743586, 4314991, -2715443, 656479,
    30574, 577153, -2937603, 5685378, -2364539, -15003388,
    43824834, -59328867, 19467462, 108217069, -317653858, 587307665,
    1602811732, 358526420, -291415750, 142187817, -18215549, -39316040,
    40712168, -19479112, 2152397, 3609814, -2559537, 673371,
    56562, 512603, -2994592, 6327381, -4030452, -12885340,
    43768177, -65128212, 32895036, 92624278, -318940292, 665805243,
    1589001235, 286179225, -276228199, 149099282, -29445090, -32120809,
    38710471, -20333414, 3445942, 2905839, -2380099, 676779,
    87042, 430412, -3009705, 6924471, -5745062, -10471809,
    43113684, -70320666, 46492757, 75041858, -316049079, 744531102,
    1568424019, 216559318, -258376687, 153804314, -39811528, -24834761,
    36303315, -20874373, 4613381, 2213059, -2181903, 668131,
    121890, 330122, -2978988, 7464318, -7486514, -7780687,
    41841007, -74808177, 60087551, 55601458, -308755828, 822929514,
    1541244789, 150080559, -238215589, 156343014, -49219487, -17556553,
    33541893, -21111438, 5646287, 1540622, -1969632, 648938,
    160849, 211573, -2898927, 7934625, -9231236, -4834785,
    39937423, -78497850, 73498741, 34464225, -296870354, 900437318,
    1507680617, 87119726, -216107147, 156780311, -57589862, -10380414,
    30479719, -21057721, 6538637, 896745, -1747815, 620754,
    203530, 74943, -2766546, 8323319, -10954201, -1661756,
    37398364, -81303437, 86540078, 11820126, -280239626, 976489074,
    1467998812, 28013695, -192417455, 155204160, -64860164, -3395097,
    27171787, -20729630, 7286752, 288652, -1520757, 585149,
    249398, -79232, -2579496, 8618759, -12629215, 1706053,
    34227866, -83146796, 99021939, -12113085, -258750403, 1050522288,
    1422514289, -26942931, -167512498, 151723539, -70984634, 3317062,
    23673765, -20146469, 7889222, -277468, -1292491, 543670,
    297776, -250028, -2336144, 8809949, -14229242, 5231831,
    30438909, -83959308, 110753645, -37091260, -232331494, 1121982671,
    1371586490, -77499718, -141754316, 146466270, -75934146, 9680951,
    20041201, -19330019, 8346787, -796491, -1066732, 497818,
    347838, -436122, -2035655, 8886750, -15726763, 8874604,
    26053657, -83683214, 121545887, -62845609, -200955631, 1190329352,
    1315615874, -123451822, -115497319, 139576694, -79695890, 15629368,
    16328780, -18304106, 8662207, -1264357, -846836, 449023,
    398621, -635776, -1678067, 8840096, -17094157, 12589616,
    21103563, -82272870, 131213237, -89084789, -164640917, 1255040012,
    1255040012, -164640917, -89084789, 131213237, -82272870, 21103563,
    12589616, -17094157, 8840096, -1678067, -635776, 398621,
    449023, -846836, -1264357, 8662207, -18304106, 16328780,
    15629368, -79695890, 139576694, -115497319, -123451822, 1315615874,
    1190329352, -200955631, -62845609, 121545887, -83683214, 26053657,
    8874604, -15726763, 8886750, -2035655, -436122, 347838,
    497818, -1066732, -796491, 8346787, -19330019, 20041201,
    9680951, -75934146, 146466270, -141754316, -77499718, 1371586490,
    1121982671, -232331494, -37091260, 110753645, -83959308, 30438909,
    5231831, -14229242, 8809949, -2336144, -250028, 297776,
    543670, -1292491, -277468, 7889222, -20146469, 23673765,
    3317062, -70984634, 151723539, -167512498, -26942931, 1422514289,
    1050522288, -258750403, -12113085, 99021939, -83146796, 34227866,
    1706053, -12629215, 8618759, -2579496, -79232, 249398,
    585149, -1520757, 288652, 7286752, -20729630, 27171787,
    -3395097, -64860164, 155204160, -192417455, 28013695, 1467998812,
    976489074, -280239626, 11820126, 86540078, -81303437, 37398364,
    -1661756, -10954201, 8323319, -2766546, 74943, 203530,
    620754, -1747815, 896745, 6538637, -21057721, 30479719,
    -10380414, -57589862, 156780311, -216107147, 87119726, 1507680617,
    900437318, -296870354, 34464225, 73498741, -78497850, 39937423,
    -4834785, -9231236, 7934625, -2898927, 211573, 160849,
    648938, -1969632, 1540622, 5646287, -21111438, 33541893,
    -17556553, -49219487, 156343014, -238215589, 150080559, 1541244789,
    822929514, -308755828, 55601458, 60087551, -74808177, 41841007,
    -7780687, -7486514, 7464318, -2978988, 330122, 121890,
    668131, -2181903, 2213059, 4613381, -20874373, 36303315,
    -24834761, -39811528, 153804314, -258376687, 216559318, 1568424019,
    744531102, -316049079, 75041858, 46492757, -70320666, 43113684,
    -10471809, -5745062, 6924471, -3009705, 430412, 87042,
    676779, -2380099, 2905839, 3445942, -20333414, 38710471,
    -32120809, -29445090, 149099282, -276228199, 286179225, 1589001235,
    665805243, -318940292, 92624278, 32895036, -65128212, 43768177,
    -12885340, -4030452, 6327381, -2994592, 512603, 56562,
    673371, -2559537, 3609814, 2152397, -19479112, 40712168,
    -39316040, -18215549, 142187817, -291415750, 358526420, 1602811732,
    587307665, -317653858, 108217069, 19467462, -59328867, 43824834,
    -15003388, -2364539, 5685378, -2937603, 577153, 30574,
    656479, -2715443, 4314991, 743586, -18306021, 42260364,
    -46318530, -6233982, 133056200, -303596890, 433153198, 1609744796,
    509581651, -312445120, 121718397, 6373637, -53024344, 43311005,
    -16812985, -767253, 5010633, -2843036, 624791, 9085,
];

pub static SRC_INT32_21_10_3455_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_10_3455_5000",
    input_stride: 9,
    output_stride: 19,
    subfilter_count: 21,
    subfilter_length: 36,
    block_in: 10,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_10_3455_5000_FIR),
};

static SRC_INT32_21_10_3455_5000_FIR: [i32; 756] = [
    -61894, 345768, -933125, 1644111, -1855172, 513950,
    3495773, -10624785, 19774783, -27673863, 28975900, -17361543,
    -12482769, 62600673, -130139125, 207347487, -284353480, 361258046,
    1814475640, 270317912, -254048627, 200468450, -134494137, 71369641,
    -21457233, -10440730, 24839235, -26016608, 19784435, -11426640,
    4430797, -204217, -1441010, 1469266, -889150, 347210,
    -54837, 337231, -963305, 1800887, -2259605, 1257457,
    2462025, -9614141, 19435839, -28927890, 32764447, -24206422,
    -3034080, 52534290, -123501765, 211083417, -311579428, 455603643,
    1804719339, 183481854, -221267103, 190670652, -136571536, 78740671,
    -29828109, -3557028, 20431506, -23995775, 19475934, -12014418,
    5255816, -886339, -1024530, 1280386, -833118, 342151,
    -45063, 321103, -978100, 1935649, -2646683, 2014659,
    1343008, -8403752, 18761630, -29744483, 36131213, -30860175,
    6747845, 41295179, -114613787, 211492323, -335137777, 552603545,
    1785302353, 101388946, -186616664, 178214204, -136411328, 84638276,
    -37479385, 3180411, 15831804, -21655644, 18865221, -12386538,
    5961819, -1522792, -612811, 1081520, -766868, 331267,
    -32476, 297014, -976103, 2044622, -3008696, 2773136,
    154202, -7006401, 17751621, -30095636, 39007256, -37207314,
    16712362, 29030894, -103544040, 208434948, -354461414, 651461782,
    1756414786, 24612543, -150702696, 163389943, -134087095, 89012477,
    -44309871, 9667975, 11119921, -19044255, 17972622, -12545015,
    6542130, -2105146, -212496, 876661, -692304, 315299,
    -17047, 264727, -956138, 2124284, -3337982, 3519877,
    -1087070, -5438536, 16410923, -29960214, 41329651, -43133950,
    26701360, 15910151, -90398596, 201820395, -369012764, 751345944,
    1718338983, -46345017, -114120549, 146514103, -129703840, 91838852,
    -50234391, 15809098, 6375030, -16212505, 16822357, -12495295,
    6992424, -2626255, 170299, 669672, -611353, 295025,
    1183, 224163, -917290, 2171440, -3627066, 4241479,
    -2361872, -3720121, 14750393, -29324531, 43042723, -48529725,
    36551624, 2120744, -75320264, 191609245, -378291545, 851396106,
    1671446205, -111056764, -77448204, 127922793, -123395412, 93118179,
    -55184682, 21515607, 1674427, -13213228, 15442019, -12246039,
    7310706, -3080322, 530073, 464230, -525924, 271250,
    22095, 175408, -858948, 2183306, -3868810, 4924369,
    -3649913, -1874428, 12786652, -28182818, 44099198, -53289741,
    46097357, -12132917, -58487527, 177816033, -381842225, 950734181,
    1616192255, -169174466, -41239355, 107966347, -115321563, 92875704,
    -59110002, 26708900, -2907669, -10100267, 13861997, -11808862,
    7497248, -3462939, 861994, 263770, -437881, 244781,
    45491, 118729, -780831, 2157582, -4056551, 5555036,
    -4929849, 72243, 10542000, -26537576, 44461246, -57316451,
    55172821, -26632598, -40112893, 160511016, -379261065, 1048473598,
    1553112120, -220430982, -6016995, 87003647, -105664700, 91160035,
    -61977443, 31320930, -7301225, -6927571, 12114885, -11198029,
    7554495, -3771096, 1161958, 71434, -349002, 216411,
    71085, 54579, -683016, 2092519, -4184251, 6120270,
    -6179605, 2090895, 8044232, -24399800, 44101399, -60521491,
    63615039, -41149344, -20440659, 139821206, -370202654, 1143729179,
    1482813703, -264641588, 27732421, 65396487, -94626376, 88041708,
    -63771946, 35294996, -11441402, -3748302, 10234870, -10430118,
    7486935, -4003172, 1426616, -109965, -260958, 186906,
    98513, -16396, -565964, 1986988, -4246629, 6607406,
    -7376731, 4150240, 5326357, -21789065, 43003325, -62827406,
    71266545, -55446835, 255875, 115930621, -354385839, 1235627101,
    1405970708, -301704262, 59564168, 43504074, -82423592, 83611440,
    -64496029, 38586322, -15269450, -613999, 8257114, -9523664,
    7300938, -4158898, 1653402, -277975, -175284, 156988,
    127323, -93360, -430530, 1840529, -4239302, 7004573,
    -8498773, 6217140, 2426215, -18733473, 41162436, -64169251,
    77978114, -69284967, 21677731, 89079745, -331598950, 1323314799,
    1323314799, -331598950, 89079745, 21677731, -69284967, 77978114,
    -64169251, 41162436, -18733473, 2426215, 6217140, -8498773,
    7004573, -4239302, 1840529, -430530, -93360, 127323,
    156988, -175284, -277975, 1653402, -4158898, 7300938,
    -9523664, 8257114, -613999, -15269450, 38586322, -64496029,
    83611440, -82423592, 43504074, 59564168, -301704262, 1405970708,
    1235627101, -354385839, 115930621, 255875, -55446835, 71266545,
    -62827406, 43003325, -21789065, 5326357, 4150240, -7376731,
    6607406, -4246629, 1986988, -565964, -16396, 98513,
    186906, -260958, -109965, 1426616, -4003172, 7486935,
    -10430118, 10234870, -3748302, -11441402, 35294996, -63771946,
    88041708, -94626376, 65396487, 27732421, -264641588, 1482813703,
    1143729179, -370202654, 139821206, -20440659, -41149344, 63615039,
    -60521491, 44101399, -24399800, 8044232, 2090895, -6179605,
    6120270, -4184251, 2092519, -683016, 54579, 71085,
    216411, -349002, 71434, 1161958, -3771096, 7554495,
    -11198029, 12114885, -6927571, -7301225, 31320930, -61977443,
    91160035, -105664700, 87003647, -6016995, -220430982, 1553112120,
    1048473598, -379261065, 160511016, -40112893, -26632598, 55172821,
    -57316451, 44461246, -26537576, 10542000, 72243, -4929849,
    5555036, -4056551, 2157582, -780831, 118729, 45491,
    244781, -437881, 263770, 861994, -3462939, 7497248,
    -11808862, 13861997, -10100267, -2907669, 26708900, -59110002,
    92875704, -115321563, 107966347, -41239355, -169174466, 1616192255,
    950734181, -381842225, 177816033, -58487527, -12132917, 46097357,
    -53289741, 44099198, -28182818, 12786652, -1874428, -3649913,
    4924369, -3868810, 2183306, -858948, 175408, 22095,
    271250, -525924, 464230, 530073, -3080322, 7310706,
    -12246039, 15442019, -13213228, 1674427, 21515607, -55184682,
    93118179, -123395412, 127922793, -77448204, -111056764, 1671446205,
    851396106, -378291545, 191609245, -75320264, 2120744, 36551624,
    -48529725, 43042723, -29324531, 14750393, -3720121, -2361872,
    4241479, -3627066, 2171440, -917290, 224163, 1183,
    295025, -611353, 669672, 170299, -2626255, 6992424,
    -12495295, 16822357, -16212505, 6375030, 15809098, -50234391,
    91838852, -129703840, 146514103, -114120549, -46345017, 1718338983,
    751345944, -369012764, 201820395, -90398596, 15910151, 26701360,
    -43133950, 41329651, -29960214, 16410923, -5438536, -1087070,
    3519877, -3337982, 2124284, -956138, 264727, -17047,
    315299, -692304, 876661, -212496, -2105146, 6542130,
    -12545015, 17972622, -19044255, 11119921, 9667975, -44309871,
    89012477, -134087095, 163389943, -150702696, 24612543, 1756414786,
    651461782, -354461414, 208434948, -103544040, 29030894, 16712362,
    -37207314, 39007256, -30095636, 17751621, -7006401, 154202,
    2773136, -3008696, 2044622, -976103, 297014, -32476,
    331267, -766868, 1081520, -612811, -1522792, 5961819,
    -12386538, 18865221, -21655644, 15831804, 3180411, -37479385,
    84638276, -136411328, 178214204, -186616664, 101388946, 1785302353,
    552603545, -335137777, 211492323, -114613787, 41295179, 6747845,
    -30860175, 36131213, -29744483, 18761630, -8403752, 1343008,
    2014659, -2646683, 1935649, -978100, 321103, -45063,
    342151, -833118, 1280386, -1024530, -886339, 5255816,
    -12014418, 19475934, -23995775, 20431506, -3557028, -29828109,
    78740671, -136571536, 190670652, -221267103, 183481854, 1804719339,
    455603643, -311579428, 211083417, -123501765, 52534290, -3034080,
    -24206422, 32764447, -28927890, 19435839, -9614141, 2462025,
    1257457, -2259605, 1800887, -963305, 337231, -54837,
    347210, -889150, 1469266, -1441010, -204217, 4430797,
    -11426640, 19784435, -26016608, 24839235, -10440730, -21457233,
    71369641, -134494137, 200468450, -254048627, 270317912, 1814475640,
    361258046, -284353480, 207347487, -130139125, 62600673, -12482769,
    -17361543, 28975900, -27673863, 19774783, -10624785, 3495773,
    513950, -1855172, 1644111, -933125, 345768, -61894,
];

pub static SRC_INT32_21_10_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_10_4535_5000",
    input_stride: 9,
    output_stride: 19,
    subfilter_count: 21,
    subfilter_length: 108,
    block_in: 10,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_10_4535_5000_FIR),
};

static SRC_INT32_21_10_4535_5000_FIR: [i32; 2268] = [
    -34117, 57521, -86388, 119666, -155365, 190401,
    -220499, 240141, -242608, 220098, -163958, 65028,
    85914, -297585, 577542, -931448, 1362287, -1869564,
    2448515, -3089395, 3776867, -4489541, 5199718, -5873370,
    6470384, -6945102, 7247160, -7322629, 7115441, -6569065,
    5628394, -4241777, 2363128, 45970, -3014254, 6558959,
    -10684276, 15380182, -20621729, 26368872, -32566915, 39147648,
    -46031270, 53129226, -60348176, 67595562, -74787673, 81862299,
    -88800921, 95673544, -102745848, 110795367, -122377747, 150858204,
    2045888672, 49804281, -73608114, 80171384, -81694468, 80716920,
    -78150255, 74446659, -69891511, 64699198, -59049485, 53102194,
    -47002911, 40884680, -34867877, 29059353, -23551374, 18420701,
    -13727969, 9517468, -5817357, 2640322, 15364, -2164423,
    3832856, -5056024, 5876592, -6342426, 6504519, -6415032,
    6125491, -5685214, 5139993, -4531066, 3894371, -3260103,
    2652540, -2090125, 1585755, -1147259, 778004, -477590,
    242595, -67329, -55445, 133844, -176279, 190961,
    -185517, 166710, -140259, 110755, -81659, 55370,
    -34189, 58534, -89466, 126359, -167673, 210770,
    -251776, 285491, -305368, 303581, -271206, 198500,
    -75308, -108411, 361951, -693131, 1107488, -1607434,
    2191401, -2853023, 3580402, -4355491, 5153669, -5943518,
    6686863, -7339100, 7849823, -8163771, 8222062, -7963731,
    7327486, -6253667, 4686318, -2575296, -121675, 3437105,
    -7392110, 11995159, -17241334, 23112218, -29576574, 36592016,
    -44107940, 52070177, -60428155, 69146069, -78221115, 87715388,
    -97817115, 108972425, -122213025, 140147951, -171030074, 259078152,
    2032024619, -43211863, -25641661, 48914492, -59514759, 64434306,
    -66106653, 65641216, -63651310, 60532438, -56572773, 52001880,
    -47013531, 41776576, -36439980, 31134925, -25975468, 21058582,
    -16464031, 12254358, -8475129, 5155511, -2309198, -64324,
    1978214, -3456478, 4532005, -5244516, 5638491, -5761167,
    5660660, -5384266, 4977000, -4480391, 3931556, -3362566,
    2800080, -2265245, 1773828, -1336540, 959518, -644929,
    391637, -195908, 52109, 46627, -107803, 139036,
    -147634, 140267, -122744, 99878, -75438, 52175,
    -33513, 58336, -90766, 130619, -176841, 227300,
    -278606, 325980, -363178, 382510, -374947, 330352,
    -237827, 86190, 135425, -436861, 826125, -1308520,
    1885736, -2554949, 3307968, -4130488, 5001483, -5892799,
    6768985, -7587397, 8298603, -8847108, 9172389, -9210239,
    8894375, -8158278, 6937183, -5170154, 2802138, 214098,
    -3916292, 8331380, -13474746, 19350183, -25950820, 33261310,
    -41261773, 49934255, -59273084, 69301709, -80101275, 91862277,
    -104986231, 120308518, -139660498, 167594891, -218603609, 373471948,
    2004465813, -127448891, 20655689, 17655459, -36673702, 47177133,
    -52935304, 55643933, -56211108, 55195342, -52981982, 49862585,
    -46073295, 41814147, -37258872, 32559770, -27849977, 23244409,
    -18840107, 14716410, -10935205, 7541408, -4563733, 2015772,
    102626, -1803717, 3110031, -4052408, 4667978, -4998152,
    5086698, -4977968, 4715306, -4339706, 3888715, -3395626,
    2888927, -2392028, 1923223, -1495864, 1118711, -796425,
    530154, -318171, 156541, -39765, -38617, 85485,
    -107690, 111683, -103248, 87322, -67906, 48047,
    -32061, 56880, -90194, 132276, -182585, 239543,
    -300318, 360652, -414733, 455156, -472968, 457832,
    -398314, 282300, -97549, -167631, 523585, -978432,
    1537120, -2200456, 2964160, -3817988, 4744966, -5720798,
    6713493, -7683241, 8582589, -9356927, 9945296, -10281522,
    10295638, -9915559, 9068966, -7685288, 5697730, -3045190,
    -326037, 4460942, -9395054, 15154497, -21757146, 29215336,
    -37540769, 46752738, -56891607, 68041255, -80367935, 94191763,
    -110129372, 129410128, -154682224, 192518400, -264110458, 492938961,
    1963548390, -202303764, 64484907, -12994162, -13640119, 29309228,
    -38919395, 44673663, -47737074, 48810255, -48362742, 46739177,
    -44211455, 41005558, -37315675, 33311588, -29142417, 24938395,
    -20811641, 16856490, -13149737, 9750999, -6703303, 4033957,
    -1755720, -131760, 1640284, -2791264, 3613794, -4142677,
    4416499, -4475805, 4361421, -4112995, 3767756, -3359543,
    2918095, -2468599, 2031488, -1622465, 1252714, -929272,
    655520, -431754, 255792, -123595, 29860, 31433,
    -66549, 81598, -82226, 73399, -59269, 43113,
    -29825, 54141, -87694, 131210, -184684, 247128,
    -316334, 388654, -458829, 519888, -563132, 578228,
    -553424, 475904, -332279, 109222, 205771, -623503,
    1152111, -1796058, 2555098, -3423289, 4388088, -5429582,
    6519911, -7622927, 8694126, -9680893, 10523063, -11153819,
    11500894, -11488067, 11036873, -10068481, 8505629, -6274503,
    3306416, 460879, -5082478, 10606472, -17075341, 24529135,
    -33011304, 42578584, -53317472, 65372054, -78992867, 94627841,
    -113105546, 136045016, -166910337, 214329403, -306551725, 616283869,
    1909770429, -267317436, 105124766, -42452888, 9124430, 11199426,
    -24354196, 32965479, -38413885, 41519073, -42820397, 42705762,
    -41475548, 39375978, -36617000, 33381907, -29832397, 26111095,
    -22342697, 18634442, -15076321, 11741307, -8685746, 5950001,
    -3559377, 1525339, 153033, -1487371, 2498214, -3213116,
    3664755, -3889092, 3923646, -3805938, 3572145, -3255978,
    2887823, -2494128, 2097043, -1714285, 1359218, -1041090,
    765427, -534515, 347950, -203215, 96253, -22010,
    -25078, 50664, -60152, 58440, -49745, 37512,
    -26815, 50126, -83248, 127357, -182987, 249773,
    -326180, 409250, -494389, 575204, -643424, 688923,
    -699863, 662970, -563962, 388121, -121011, -250665,
    738109, -1349383, 2088320, -2953442, 3936928, -5023687,
    6190589, -7405906, 8629005, -9810345, 10891777, -11807187,
    12483462, -12841755, 12799014, -12269692, 11167568, -9407541,
    6907253, -3588362, -622794, 5795442, -11995982, 19291611,
    -27756978, 37485610, -48609149, 61330241, -75980850, 93131786,
    -113815166, 140025848, -176023335, 232479601, -344933482, 742232045,
    1843784725, -322178269, 141941188, -70179310, 31174406, -6785775,
    -9541005, 20765739, -28440774, 33480144, -36477649, 37853968,
    -37930248, 36966900, -35184661, 32776121, -29911916, 26743899,
    -23406608, 20017834, -16678797, 13474219, -10472508, 7726152,
    -5272393, 3134186, -1321423, -167595, 1344509, -2229136,
    2847641, -3230723, 3411876, -3425771, 3306819, -3087937,
    2799551, -2468833, 2119196, -1770003, 1436507, -1129966,
    857917, -624569, 431284, -277095, 159258, -73772,
    15872, 19536, -37509, 42784, -39565, 31391,
    -23055, 44866, -76881, 120708, -177421, 247292,
    -329498, 421843, -520493, 619768, -711994, 787455,
    -834460, 839536, -787780, 663360, -450179, 132679,
    303212, -869030, 1572650, -2417130, 3399573, -4510057,
    5730688, -7034835, 8386590, -9740510, 11041654, -12225958,
    13220938, -13946706, 14317280, -14242098, 13627684, -12379318,
    10402575, -7604529, 3894355, 817017, -6618704, 13603867,
    -21877104, 31567217, -42848939, 55980384, -71370042, 89703516,
    -112202787, 141214860, -181753556, 246473134, -378283049, 869446318,
    1766389312, -366723170, 174394889, -95681109, 52088557, -24289378,
    5218936, 8327007, -18027345, 24864891, -29471891, 32290911,
    -33655874, 33835131, -33055077, 31513238, -29385396, 26829304,
    -23986417, 20982537, -17927924, 14917213, -12029379, 9327872,
    -6861022, 4662713, -2753366, 1141169, 176465, -1211281,
    1982465, -2514889, 2837388, -2981119, 2978061, -2859693,
    2655873, -2393959, 2098147, -1789049, 1483488, -1194486,
    931422, -700325, 504272, -343853, 217670, -122840,
    55480, -11148, -14777, 26778, -28964, 24903,
    -18593, 38424, -68659, 111314, -167991, 239601,
    -326062, 425988, -536397, 652440, -767199, 871568,
    -954233, 1001787, -998998, 929223, -775000, 518803,
    -143940, -364404, 1018028, -1824509, 2785978, -3897927,
    5148105, -6515558, 7969869, -9470643, 10967287, -12399100,
    13695702, -14777786, 15558169, -15943092, 15833687, -15127501,
    13719909, -11505231, 8377257, -4228801, -1050254, 7577273,
    -15484851, 24934721, -36141584, 49414536, -65231672, 84382195,
    -108259000, 139527636, -183893801, 255877615, -405665320, 996544875,
    1678515915, -400936454, 202047257, -118522937, 71477540, -40970735,
    19630415, -4097079, -7389241, 15854203, -21952271, 26136862,
    -28746603, 30051485, -30278391, 29625364, -28269474, 26370953,
    -24075133, 21513135, -18801903, 16043961, -13327151, 10724510,
    -8294383, 6080816, -4114258, 2412540, -982107, -180549,
    1087310, -1756776, 2212590, -2481806, 2593360, -2576679,
    2460474, -2271738, 2034969, -1771607, 1499698, -1233752,
    984786, -760509, 565636, -402281, 270402, -168278,
    92973, -40773, 7578, 10760, -18178, 18200,
    -13492, 30889, -58691, 99287, -154784, 226723,
    -315776, 421408, -541553, 672303, -807644, 939262,
    -1056453, 1146144, -1193068, 1180095, -1088734, 899816,
    -594336, 154464, 435327, -1187022, 2107784, -3198662,
    4453342, -5857023, 7385433, -9004090, 10667802, -12320492,
    13895330, -15315208, 16493514, -17335187, 17737963, -17593709,
    16789701, -15209616, 12733976, -9239617, 4597606, 1331302,
    -8705096, 17715286, -28612418, 41750725, -57669066, 77246062,
    -102021451, 134935914, -182302940, 260334326, -426198862, 1122120025,
    1581216498, -424946475, 224564365, -138333041, 88990761, -56511949,
    33410017, -16256886, 3256263, 6634687, -14076551, 19522678,
    -23308424, 25699214, -26917316, 27156922, -26592545, 25383457,
    -23675771, 21603147, -19286742, 16834796, -14342155, 11889878,
    -9545061, 7360943, -5377306, 3621185, -2107853, 842042,
    180653, -972243, 1550754, -1938637, 2161238, -2245369,
    2218032, -2105331, 1931573, -1718599, 1485307, -1247395,
    1017283, -804191, 614358, -451363, 316507, -209249,
    127642, -68763, 29109, -4939, -7437, 11434,
    -7833, 22380, -47127, 84798, -137969, 208793,
    -298690, 407999, -535625, 678689, -832209, 988842,
    -1138708, 1269334, -1365721, 1410586, -1384768, 1267817,
    -1038773, 677116, -163867, -517172, 1378101, -2425549,
    3659327, -5071132, 6643385, -8348258, 10146924, -11989101,
    13812898, -15544990, 17101114, -18386842, 19298593, -19724750,
    19546767, -18640037, 16874234, -14112710, 10210335, -5008818,
    -1672003, 10049521, -20405060, 33130892, -48816009, 68411463,
    -93574923, 127469331, -176910384, 259567368, -439071528, 1244757558,
    1475648127, -439020122, 241719131, -154808541, 104322337, -70623713,
    46291559, -27911713, 13694630, -2605152, -6007836, 12587046,
    -17456872, 20872192, -23045739, 24163630, -24394072, 23891988,
    -22801193, 21255077, -19376467, 17277052, -15056687, 12802737,
    -10589625, 8478628, -6517985, 4743319, -3178348, 1835880,
    -719012, -177494, 865741, -1363172, 1691070, -1873126,
    1934117, -1898747, 1790659, -1631653, 1441103, -1235573,
    1028624, -830790, 649696, -490296, 355194, -245023,
    158851, -94594, 49401, -20007, 3039, 4750,
    -1715, 13041, -34157, 68075, -117796, 186052,
    -274994, 385840, -518501, 671195, -840085, 1018954,
    -1198956, 1368467, -1513061, 1615643, -1656754, 1615060,
    -1468044, 1192877, -767474, 171710, 611253, -1593551,
    2781169, -4172532, 5757166, -7514512, 9412950, -11409058,
    13447180, -15459302, 17365245, -19073160, 20480268, -21473752,
    21931670, -21723676, 20711266, -18747121, 15672914, -11314598,
    5473606, 2088772, -11678720, 23718327, -38834468, 58031106,
    -83050488, 117216064, -167719309, 253391594, -443555299, 1363056377,
    1363056377, -443555299, 253391594, -167719309, 117216064, -83050488,
    58031106, -38834468, 23718327, -11678720, 2088772, 5473606,
    -11314598, 15672914, -18747121, 20711266, -21723676, 21931670,
    -21473752, 20480268, -19073160, 17365245, -15459302, 13447180,
    -11409058, 9412950, -7514512, 5757166, -4172532, 2781169,
    -1593551, 611253, 171710, -767474, 1192877, -1468044,
    1615060, -1656754, 1615643, -1513061, 1368467, -1198956,
    1018954, -840085, 671195, -518501, 385840, -274994,
    186052, -117796, 68075, -34157, 13041, -1715,
    4750, 3039, -20007, 49401, -94594, 158851,
    -245023, 355194, -490296, 649696, -830790, 1028624,
    -1235573, 1441103, -1631653, 1790659, -1898747, 1934117,
    -1873126, 1691070, -1363172, 865741, -177494, -719012,
    1835880, -3178348, 4743319, -6517985, 8478628, -10589625,
    12802737, -15056687, 17277052, -19376467, 21255077, -22801193,
    23891988, -24394072, 24163630, -23045739, 20872192, -17456872,
    12587046, -6007836, -2605152, 13694630, -27911713, 46291559,
    -70623713, 104322337, -154808541, 241719131, -439020122, 1475648127,
    1244757558, -439071528, 259567368, -176910384, 127469331, -93574923,
    68411463, -48816009, 33130892, -20405060, 10049521, -1672003,
    -5008818, 10210335, -14112710, 16874234, -18640037, 19546767,
    -19724750, 19298593, -18386842, 17101114, -15544990, 13812898,
    -11989101, 10146924, -8348258, 6643385, -5071132, 3659327,
    -2425549, 1378101, -517172, -163867, 677116, -1038773,
    1267817, -1384768, 1410586, -1365721, 1269334, -1138708,
    988842, -832209, 678689, -535625, 407999, -298690,
    208793, -137969, 84798, -47127, 22380, -7833,
    11434, -7437, -4939, 29109, -68763, 127642,
    -209249, 316507, -451363, 614358, -804191, 1017283,
    -1247395, 1485307, -1718599, 1931573, -2105331, 2218032,
    -2245369, 2161238, -1938637, 1550754, -972243, 180653,
    842042, -2107853, 3621185, -5377306, 7360943, -9545061,
    11889878, -14342155, 16834796, -19286742, 21603147, -23675771,
    25383457, -26592545, 27156922, -26917316, 25699214, -23308424,
    19522678, -14076551, 6634687, 3256263, -16256886, 33410017,
    -56511949, 88990761, -138333041, 224564365, -424946475, 1581216498,
    1122120025, -426198862, 260334326, -182302940, 134935914, -102021451,
    77246062, -57669066, 41750725, -28612418, 17715286, -8705096,
    1331302, 4597606, -9239617, 12733976, -15209616, 16789701,
    -17593709, 17737963, -17335187, 16493514, -15315208, 13895330,
    -12320492, 10667802, -9004090, 7385433, -5857023, 4453342,
    -3198662, 2107784, -1187022, 435327, 154464, -594336,
    899816, -1088734, 1180095, -1193068, 1146144, -1056453,
    939262, -807644, 672303, -541553, 421408, -315776,
    226723, -154784, 99287, -58691, 30889, -13492,
    18200, -18178, 10760, 7578, -40773, 92973,
    -168278, 270402, -402281, 565636, -760509, 984786,
    -1233752, 1499698, -1771607, 2034969, -2271738, 2460474,
    -2576679, 2593360, -2481806, 2212590, -1756776, 1087310,
    -180549, -982107, 2412540, -4114258, 6080816, -8294383,
    10724510, -13327151, 16043961, -18801903, 21513135, -24075133,
    26370953, -28269474, 29625364, -30278391, 30051485, -28746603,
    26136862, -21952271, 15854203, -7389241, -4097079, 19630415,
    -40970735, 71477540, -118522937, 202047257, -400936454, 1678515915,
    996544875, -405665320, 255877615, -183893801, 139527636, -108259000,
    84382195, -65231672, 49414536, -36141584, 24934721, -15484851,
    7577273, -1050254, -4228801, 8377257, -11505231, 13719909,
    -15127501, 15833687, -15943092, 15558169, -14777786, 13695702,
    -12399100, 10967287, -9470643, 7969869, -6515558, 5148105,
    -3897927, 2785978, -1824509, 1018028, -364404, -143940,
    518803, -775000, 929223, -998998, 1001787, -954233,
    871568, -767199, 652440, -536397, 425988, -326062,
    239601, -167991, 111314, -68659, 38424, -18593,
    24903, -28964, 26778, -14777, -11148, 55480,
    -122840, 217670, -343853, 504272, -700325, 931422,
    -1194486, 1483488, -1789049, 2098147, -2393959, 2655873,
    -2859693, 2978061, -2981119, 2837388, -2514889, 1982465,
    -1211281, 176465, 1141169, -2753366, 4662713, -6861022,
    9327872, -12029379, 14917213, -17927924, 20982537, -23986417,
    26829304, -29385396, 31513238, -33055077, 33835131, -33655874,
    32290911, -29471891, 24864891, -18027345, 8327007, 5218936,
    -24289378, 52088557, -95681109, 174394889, -366723170, 1766389312,
    869446318, -378283049, 246473134, -181753556, 141214860, -112202787,
    89703516, -71370042, 55980384, -42848939, 31567217, -21877104,
    13603867, -6618704, 817017, 3894355, -7604529, 10402575,
    -12379318, 13627684, -14242098, 14317280, -13946706, 13220938,
    -12225958, 11041654, -9740510, 8386590, -7034835, 5730688,
    -4510057, 3399573, -2417130, 1572650, -869030, 303212,
    132679, -450179, 663360, -787780, 839536, -834460,
    787455, -711994, 619768, -520493, 421843, -329498,
    247292, -177421, 120708, -76881, 44866, -23055,
    31391, -39565, 42784, -37509, 19536, 15872,
    -73772, 159258, -277095, 431284, -624569, 857917,
    -1129966, 1436507, -1770003, 2119196, -2468833, 2799551,
    -3087937, 3306819, -3425771, 3411876, -3230723, 2847641,
    -2229136, 1344509, -167595, -1321423, 3134186, -5272393,
    7726152, -10472508, 13474219, -16678797, 20017834, -23406608,
    26743899, -29911916, 32776121, -35184661, 36966900, -37930248,
    37853968, -36477649, 33480144, -28440774, 20765739, -9541005,
    -6785775, 31174406, -70179310, 141941188, -322178269, 1843784725,
    742232045, -344933482, 232479601, -176023335, 140025848, -113815166,
    93131786, -75980850, 61330241, -48609149, 37485610, -27756978,
    19291611, -11995982, 5795442, -622794, -3588362, 6907253,
    -9407541, 11167568, -12269692, 12799014, -12841755, 12483462,
    -11807187, 10891777, -9810345, 8629005, -7405906, 6190589,
    -5023687, 3936928, -2953442, 2088320, -1349383, 738109,
    -250665, -121011, 388121, -563962, 662970, -699863,
    688923, -643424, 575204, -494389, 409250, -326180,
    249773, -182987, 127357, -83248, 50126, -26815,
    37512, -49745, 58440, -60152, 50664, -25078,
    -22010, 96253, -203215, 347950, -534515, 765427,
    -1041090, 1359218, -1714285, 2097043, -2494128, 2887823,
    -3255978, 3572145, -3805938, 3923646, -3889092, 3664755,
    -3213116, 2498214, -1487371, 153033, 1525339, -3559377,
    5950001, -8685746, 11741307, -15076321, 18634442, -22342697,
    26111095, -29832397, 33381907, -36617000, 39375978, -41475548,
    42705762, -42820397, 41519073, -38413885, 32965479, -24354196,
    11199426, 9124430, -42452888, 105124766, -267317436, 1909770429,
    616283869, -306551725, 214329403, -166910337, 136045016, -113105546,
    94627841, -78992867, 65372054, -53317472, 42578584, -33011304,
    24529135, -17075341, 10606472, -5082478, 460879, 3306416,
    -6274503, 8505629, -10068481, 11036873, -11488067, 11500894,
    -11153819, 10523063, -9680893, 8694126, -7622927, 6519911,
    -5429582, 4388088, -3423289, 2555098, -1796058, 1152111,
    -623503, 205771, 109222, -332279, 475904, -553424,
    578228, -563132, 519888, -458829, 388654, -316334,
    247128, -184684, 131210, -87694, 54141, -29825,
    43113, -59269, 73399, -82226, 81598, -66549,
    31433, 29860, -123595, 255792, -431754, 655520,
    -929272, 1252714, -1622465, 2031488, -2468599, 2918095,
    -3359543, 3767756, -4112995, 4361421, -4475805, 4416499,
    -4142677, 3613794, -2791264, 1640284, -131760, -1755720,
    4033957, -6703303, 9750999, -13149737, 16856490, -20811641,
    24938395, -29142417, 33311588, -37315675, 41005558, -44211455,
    46739177, -48362742, 48810255, -47737074, 44673663, -38919395,
    29309228, -13640119, -12994162, 64484907, -202303764, 1963548390,
    492938961, -264110458, 192518400, -154682224, 129410128, -110129372,
    94191763, -80367935, 68041255, -56891607, 46752738, -37540769,
    29215336, -21757146, 15154497, -9395054, 4460942, -326037,
    -3045190, 5697730, -7685288, 9068966, -9915559, 10295638,
    -10281522, 9945296, -9356927, 8582589, -7683241, 6713493,
    -5720798, 4744966, -3817988, 2964160, -2200456, 1537120,
    -978432, 523585, -167631, -97549, 282300, -398314,
    457832, -472968, 455156, -414733, 360652, -300318,
    239543, -182585, 132276, -90194, 56880, -32061,
    48047, -67906, 87322, -103248, 111683, -107690,
    85485, -38617, -39765, 156541, -318171, 530154,
    -796425, 1118711, -1495864, 1923223, -2392028, 2888927,
    -3395626, 3888715, -4339706, 4715306, -4977968, 5086698,
    -4998152, 4667978, -4052408, 3110031, -1803717, 102626,
    2015772, -4563733, 7541408, -10935205, 14716410, -18840107,
    23244409, -27849977, 32559770, -37258872, 41814147, -46073295,
    49862585, -52981982, 55195342, -56211108, 55643933, -52935304,
    47177133, -36673702, 17655459, 20655689, -127448891, 2004465813,
    373471948, -218603609, 167594891, -139660498, 120308518, -104986231,
    91862277, -80101275, 69301709, -59273084, 49934255, -41261773,
    33261310, -25950820, 19350183, -13474746, 8331380, -3916292,
    214098, 2802138, -5170154, 6937183, -8158278, 8894375,
    -9210239, 9172389, -8847108, 8298603, -7587397, 6768985,
    -5892799, 5001483, -4130488, 3307968, -2554949, 1885736,
    -1308520, 826125, -436861, 135425, 86190, -237827,
    330352, -374947, 382510, -363178, 325980, -278606,
    227300, -176841, 130619, -90766, 58336, -33513,
    52175, -75438, 99878, -122744, 140267, -147634,
    139036, -107803, 46627, 52109, -195908, 391637,
    -644929, 959518, -1336540, 1773828, -2265245, 2800080,
    -3362566, 3931556, -4480391, 4977000, -5384266, 5660660,
    -5761167, 5638491, -5244516, 4532005, -3456478, 1978214,
    -64324, -2309198, 5155511, -8475129, 12254358, -16464031,
    21058582, -25975468, 31134925, -36439980, 41776576, -47013531,
    52001880, -56572773, 60532438, -63651310, 65641216, -66106653,
    64434306, -59514759, 48914492, -25641661, -43211863, 2032024619,
    259078152, -171030074, 140147951, -122213025, 108972425, -97817115,
    87715388, -78221115, 69146069, -60428155, 52070177, -44107940,
    36592016, -29576574, 23112218, -17241334, 11995159, -7392110,
    3437105, -121675, -2575296, 4686318, -6253667, 7327486,
    -7963731, 8222062, -8163771, 7849823, -7339100, 6686863,
    -5943518, 5153669, -4355491, 3580402, -2853023, 2191401,
    -1607434, 1107488, -693131, 361951, -108411, -75308,
    198500, -271206, 303581, -305368, 285491, -251776,
    210770, -167673, 126359, -89466, 58534, -34189,
    55370, -81659, 110755, -140259, 166710, -185517,
    190961, -176279, 133844, -55445, -67329, 242595,
    -477590, 778004, -1147259, 1585755, -2090125, 2652540,
    -3260103, 3894371, -4531066, 5139993, -5685214, 6125491,
    -6415032, 6504519, -6342426, 5876592, -5056024, 3832856,
    -2164423, 15364, 2640322, -5817357, 9517468, -13727969,
    18420701, -23551374, 29059353, -34867877, 40884680, -47002911,
    53102194, -59049485, 64699198, -69891511, 74446659, -78150255,
    80716920, -81694468, 80171384, -73608114, 49804281, 2045888672,
    150858204, -122377747, 110795367, -102745848, 95673544, -88800921,
    81862299, -74787673, 67595562, -60348176, 53129226, -46031270,
    39147648, -32566915, 26368872, -20621729, 15380182, -10684276,
    6558959, -3014254, 45970, 2363128, -4241777, 5628394,
    -6569065, 7115441, -7322629, 7247160, -6945102, 6470384,
    -5873370, 5199718, -4489541, 3776867, -3089395, 2448515,
    -1869564, 1362287, -931448, 577542, -297585, 85914,
    65028, -163958, 220098, -242608, 240141, -220499,
    190401, -155365, 119666, -86388, 57521, -34117,
];

pub static SRC_INT32_21_16_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_16_4535_5000",
    input_stride: 3,
    output_stride: 4,
    subfilter_count: 21,
    subfilter_length: 108,
    block_in: 16,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_16_4535_5000_FIR),
};

static SRC_INT32_21_16_4535_5000_FIR: [i32; 2268] = [
    -34117, 57521, -86388, 119666, -155365, 190401,
    -220499, 240141, -242608, 220098, -163958, 65028,
    85914, -297585, 577542, -931448, 1362287, -1869564,
    2448515, -3089395, 3776867, -4489541, 5199718, -5873370,
    6470384, -6945102, 7247160, -7322629, 7115441, -6569065,
    5628394, -4241777, 2363128, 45970, -3014254, 6558959,
    -10684276, 15380182, -20621729, 26368872, -32566915, 39147648,
    -46031270, 53129226, -60348176, 67595562, -74787673, 81862299,
    -88800921, 95673544, -102745848, 110795367, -122377747, 150858204,
    2045888672, 49804281, -73608114, 80171384, -81694468, 80716920,
    -78150255, 74446659, -69891511, 64699198, -59049485, 53102194,
    -47002911, 40884680, -34867877, 29059353, -23551374, 18420701,
    -13727969, 9517468, -5817357, 2640322, 15364, -2164423,
    3832856, -5056024, 5876592, -6342426, 6504519, -6415032,
    6125491, -5685214, 5139993, -4531066, 3894371, -3260103,
    2652540, -2090125, 1585755, -1147259, 778004, -477590,
    242595, -67329, -55445, 133844, -176279, 190961,
    -185517, 166710, -140259, 110755, -81659, 55370,
    -34189, 58534, -89466, 126359, -167673, 210770,
    -251776, 285491, -305368, 303581, -271206, 198500,
    -75308, -108411, 361951, -693131, 1107488, -1607434,
    2191401, -2853023, 3580402, -4355491, 5153669, -5943518,
    6686863, -7339100, 7849823, -8163771, 8222062, -7963731,
    7327486, -6253667, 4686318, -2575296, -121675, 3437105,
    -7392110, 11995159, -17241334, 23112218, -29576574, 36592016,
    -44107940, 52070177, -60428155, 69146069, -78221115, 87715388,
    -97817115, 108972425, -122213025, 140147951, -171030074, 259078152,
    2032024619, -43211863, -25641661, 48914492, -59514759, 64434306,
    -66106653, 65641216, -63651310, 60532438, -56572773, 52001880,
    -47013531, 41776576, -36439980, 31134925, -25975468, 21058582,
    -16464031, 12254358, -8475129, 5155511, -2309198, -64324,
    1978214, -3456478, 4532005, -5244516, 5638491, -5761167,
    5660660, -5384266, 4977000, -4480391, 3931556, -3362566,
    2800080, -2265245, 1773828, -1336540, 959518, -644929,
    391637, -195908, 52109, 46627, -107803, 139036,
    -147634, 140267, -122744, 99878, -75438, 52175,
    -33513, 58336, -90766, 130619, -176841, 227300,
    -278606, 325980, -363178, 382510, -374947, 330352,
    -237827, 86190, 135425, -436861, 826125, -1308520,
    1885736, -2554949, 3307968, -4130488, 5001483, -5892799,
    6768985, -7587397, 8298603, -8847108, 9172389, -9210239,
    8894375, -8158278, 6937183, -5170154, 2802138, 214098,
    -3916292, 8331380, -13474746, 19350183, -25950820, 33261310,
    -41261773, 49934255, -59273084, 69301709, -80101275, 91862277,
    -104986231, 120308518, -139660498, 167594891, -218603609, 373471948,
    2004465813, -127448891, 20655689, 17655459, -36673702, 47177133,
    -52935304, 55643933, -56211108, 55195342, -52981982, 49862585,
    -46073295, 41814147, -37258872, 32559770, -27849977, 23244409,
    -18840107, 14716410, -10935205, 7541408, -4563733, 2015772,
    102626, -1803717, 3110031, -4052408, 4667978, -4998152,
    5086698, -4977968, 4715306, -4339706, 3888715, -3395626,
    2888927, -2392028, 1923223, -1495864, 1118711, -796425,
    530154, -318171, 156541, -39765, -38617, 85485,
    -107690, 111683, -103248, 87322, -67906, 48047,
    -32061, 56880, -90194, 132276, -182585, 239543,
    -300318, 360652, -414733, 455156, -472968, 457832,
    -398314, 282300, -97549, -167631, 523585, -978432,
    1537120, -2200456, 2964160, -3817988, 4744966, -5720798,
    6713493, -7683241, 8582589, -9356927, 9945296, -10281522,
    10295638, -9915559, 9068966, -7685288, 5697730, -3045190,
    -326037, 4460942, -9395054, 15154497, -21757146, 29215336,
    -37540769, 46752738, -56891607, 68041255, -80367935, 94191763,
    -110129372, 129410128, -154682224, 192518400, -264110458, 492938961,
    1963548390, -202303764, 64484907, -12994162, -13640119, 29309228,
    -38919395, 44673663, -47737074, 48810255, -48362742, 46739177,
    -44211455, 41005558, -37315675, 33311588, -29142417, 24938395,
    -20811641, 16856490, -13149737, 9750999, -6703303, 4033957,
    -1755720, -131760, 1640284, -2791264, 3613794, -4142677,
    4416499, -4475805, 4361421, -4112995, 3767756, -3359543,
    2918095, -2468599, 2031488, -1622465, 1252714, -929272,
    655520, -431754, 255792, -123595, 29860, 31433,
    -66549, 81598, -82226, 73399, -59269, 43113,
    -29825, 54141, -87694, 131210, -184684, 247128,
    -316334, 388654, -458829, 519888, -563132, 578228,
    -553424, 475904, -332279, 109222, 205771, -623503,
    1152111, -1796058, 2555098, -3423289, 4388088, -5429582,
    6519911, -7622927, 8694126, -9680893, 10523063, -11153819,
    11500894, -11488067, 11036873, -10068481, 8505629, -6274503,
    3306416, 460879, -5082478, 10606472, -17075341, 24529135,
    -33011304, 42578584, -53317472, 65372054, -78992867, 94627841,
    -113105546, 136045016, -166910337, 214329403, -306551725, 616283869,
    1909770429, -267317436, 105124766, -42452888, 9124430, 11199426,
    -24354196, 32965479, -38413885, 41519073, -42820397, 42705762,
    -41475548, 39375978, -36617000, 33381907, -29832397, 26111095,
    -22342697, 18634442, -15076321, 11741307, -8685746, 5950001,
    -3559377, 1525339, 153033, -1487371, 2498214, -3213116,
    3664755, -3889092, 3923646, -3805938, 3572145, -3255978,
    2887823, -2494128, 2097043, -1714285, 1359218, -1041090,
    765427, -534515, 347950, -203215, 96253, -22010,
    -25078, 50664, -60152, 58440, -49745, 37512,
    -26815, 50126, -83248, 127357, -182987, 249773,
    -326180, 409250, -494389, 575204, -643424, 688923,
    -699863, 662970, -563962, 388121, -121011, -250665,
    738109, -1349383, 2088320, -2953442, 3936928, -5023687,
    6190589, -7405906, 8629005, -9810345, 10891777, -11807187,
    12483462, -12841755, 12799014, -12269692, 11167568, -9407541,
    6907253, -3588362, -622794, 5795442, -11995982, 19291611,
    -27756978, 37485610, -48609149, 61330241, -75980850, 93131786,
    -113815166, 140025848, -176023335, 232479601, -344933482, 742232045,
    1843784725, -322178269, 141941188, -70179310, 31174406, -6785775,
    -9541005, 20765739, -28440774, 33480144, -36477649, 37853968,
    -37930248, 36966900, -35184661, 32776121, -29911916, 26743899,
    -23406608, 20017834, -16678797, 13474219, -10472508, 7726152,
    -5272393, 3134186, -1321423, -167595, 1344509, -2229136,
    2847641, -3230723, 3411876, -3425771, 3306819, -3087937,
    2799551, -2468833, 2119196, -1770003, 1436507, -1129966,
    857917, -624569, 431284, -277095, 159258, -73772,
    15872, 19536, -37509, 42784, -39565, 31391,
    -23055, 44866, -76881, 120708, -177421, 247292,
    -329498, 421843, -520493, 619768, -711994, 787455,
    -834460, 839536, -787780, 663360, -450179, 132679,
    303212, -869030, 1572650, -2417130, 3399573, -4510057,
    5730688, -7034835, 8386590, -9740510, 11041654, -12225958,
    13220938, -13946706, 14317280, -14242098, 13627684, -12379318,
    10402575, -7604529, 3894355, 817017, -6618704, 13603867,
    -21877104, 31567217, -42848939, 55980384, -71370042, 89703516,
    -112202787, 141214860, -181753556, 246473134, -378283049, 869446318,
    1766389312, -366723170, 174394889, -95681109, 52088557, -24289378,
    5218936, 8327007, -18027345, 24864891, -29471891, 32290911,
    -33655874, 33835131, -33055077, 31513238, -29385396, 26829304,
    -23986417, 20982537, -17927924, 14917213, -12029379, 9327872,
    -6861022, 4662713, -2753366, 1141169, 176465, -1211281,
    1982465, -2514889, 2837388, -2981119, 2978061, -2859693,
    2655873, -2393959, 2098147, -1789049, 1483488, -1194486,
    931422, -700325, 504272, -343853, 217670, -122840,
    55480, -11148, -14777, 26778, -28964, 24903,
    -18593, 38424, -68659, 111314, -167991, 239601,
    -326062, 425988, -536397, 652440, -767199, 871568,
    -954233, 1001787, -998998, 929223, -775000, 518803,
    -143940, -364404, 1018028, -1824509, 2785978, -3897927,
    5148105, -6515558, 7969869, -9470643, 10967287, -12399100,
    13695702, -14777786, 15558169, -15943092, 15833687, -15127501,
    13719909, -11505231, 8377257, -4228801, -1050254, 7577273,
    -15484851, 24934721, -36141584, 49414536, -65231672, 84382195,
    -108259000, 139527636, -183893801, 255877615, -405665320, 996544875,
    1678515915, -400936454, 202047257, -118522937, 71477540, -40970735,
    19630415, -4097079, -7389241, 15854203, -21952271, 26136862,
    -28746603, 30051485, -30278391, 29625364, -28269474, 26370953,
    -24075133, 21513135, -18801903, 16043961, -13327151, 10724510,
    -8294383, 6080816, -4114258, 2412540, -982107, -180549,
    1087310, -1756776, 2212590, -2481806, 2593360, -2576679,
    2460474, -2271738, 2034969, -1771607, 1499698, -1233752,
    984786, -760509, 565636, -402281, 270402, -168278,
    92973, -40773, 7578, 10760, -18178, 18200,
    -13492, 30889, -58691, 99287, -154784, 226723,
    -315776, 421408, -541553, 672303, -807644, 939262,
    -1056453, 1146144, -1193068, 1180095, -1088734, 899816,
    -594336, 154464, 435327, -1187022, 2107784, -3198662,
    4453342, -5857023, 7385433, -9004090, 10667802, -12320492,
    13895330, -15315208, 16493514, -17335187, 17737963, -17593709,
    16789701, -15209616, 12733976, -9239617, 4597606, 1331302,
    -8705096, 17715286, -28612418, 41750725, -57669066, 77246062,
    -102021451, 134935914, -182302940, 260334326, -426198862, 1122120025,
    1581216498, -424946475, 224564365, -138333041, 88990761, -56511949,
    33410017, -16256886, 3256263, 6634687, -14076551, 19522678,
    -23308424, 25699214, -26917316, 27156922, -26592545, 25383457,
    -23675771, 21603147, -19286742, 16834796, -14342155, 11889878,
    -9545061, 7360943, -5377306, 3621185, -2107853, 842042,
    180653, -972243, 1550754, -1938637, 2161238, -2245369,
    2218032, -2105331, 1931573, -1718599, 1485307, -1247395,
    1017283, -804191, 614358, -451363, 316507, -209249,
    127642, -68763, 29109, -4939, -7437, 11434,
    -7833, 22380, -47127, 84798, -137969, 208793,
    -298690, 407999, -535625, 678689, -832209, 988842,
    -1138708, 1269334, -1365721, 1410586, -1384768, 1267817,
    -1038773, 677116, -163867, -517172, 1378101, -2425549,
    3659327, -5071132, 6643385, -8348258, 10146924, -11989101,
    13812898, -15544990, 17101114, -18386842, 19298593, -19724750,
    19546767, -18640037, 16874234, -14112710, 10210335, -5008818,
    -1672003, 10049521, -20405060, 33130892, -48816009, 68411463,
    -93574923, 127469331, -176910384, 259567368, -439071528, 1244757558,
    1475648127, -439020122, 241719131, -154808541, 104322337, -70623713,
    46291559, -27911713, 13694630, -2605152, -6007836, 12587046,
    -17456872, 20872192, -23045739, 24163630, -24394072, 23891988,
    -22801193, 21255077, -19376467, 17277052, -15056687, 12802737,
    -10589625, 8478628, -6517985, 4743319, -3178348, 1835880,
    -719012, -177494, 865741, -1363172, 1691070, -1873126,
    1934117, -1898747, 1790659, -1631653, 1441103, -1235573,
    1028624, -830790, 649696, -490296, 355194, -245023,
    158851, -94594, 49401, -20007, 3039, 4750,
    -1715, 13041, -34157, 68075, -117796, 186052,
    -274994, 385840, -518501, 671195, -840085, 1018954,
    -1198956, 1368467, -1513061, 1615643, -1656754, 1615060,
    -1468044, 1192877, -767474, 171710, 611253, -1593551,
    2781169, -4172532, 5757166, -7514512, 9412950, -11409058,
    13447180, -15459302, 17365245, -19073160, 20480268, -21473752,
    21931670, -21723676, 20711266, -18747121, 15672914, -11314598,
    5473606, 2088772, -11678720, 23718327, -38834468, 58031106,
    -83050488, 117216064, -167719309, 253391594, -443555299, 1363056377,
    1363056377, -443555299, 253391594, -167719309, 117216064, -83050488,
    58031106, -38834468, 23718327, -11678720, 2088772, 5473606,
    -11314598, 15672914, -18747121, 20711266, -21723676, 21931670,
    -21473752, 20480268, -19073160, 17365245, -15459302, 13447180,
    -11409058, 9412950, -7514512, 5757166, -4172532, 2781169,
    -1593551, 611253, 171710, -767474, 1192877, -1468044,
    1615060, -1656754, 1615643, -1513061, 1368467, -1198956,
    1018954, -840085, 671195, -518501, 385840, -274994,
    186052, -117796, 68075, -34157, 13041, -1715,
    4750, 3039, -20007, 49401, -94594, 158851,
    -245023, 355194, -490296, 649696, -830790, 1028624,
    -1235573, 1441103, -1631653, 1790659, -1898747, 1934117,
    -1873126, 1691070, -1363172, 865741, -177494, -719012,
    1835880, -3178348, 4743319, -6517985, 8478628, -10589625,
    12802737, -15056687, 17277052, -19376467, 21255077, -22801193,
    23891988, -24394072, 24163630, -23045739, 20872192, -17456872,
    12587046, -6007836, -2605152, 13694630, -27911713, 46291559,
    -70623713, 104322337, -154808541, 241719131, -439020122, 1475648127,
    1244757558, -439071528, 259567368, -176910384, 127469331, -93574923,
    68411463, -48816009, 33130892, -20405060, 10049521, -1672003,
    -5008818, 10210335, -14112710, 16874234, -18640037, 19546767,
    -19724750, 19298593, -18386842, 17101114, -15544990, 13812898,
    -11989101, 10146924, -8348258, 6643385, -5071132, 3659327,
    -2425549, 1378101, -517172, -163867, 677116, -1038773,
    1267817, -1384768, 1410586, -1365721, 1269334, -1138708,
    988842, -832209, 678689, -535625, 407999, -298690,
    208793, -137969, 84798, -47127, 22380, -7833,
    11434, -7437, -4939, 29109, -68763, 127642,
    -209249, 316507, -451363, 614358, -804191, 1017283,
    -1247395, 1485307, -1718599, 1931573, -2105331, 2218032,
    -2245369, 2161238, -1938637, 1550754, -972243, 180653,
    842042, -2107853, 3621185, -5377306, 7360943, -9545061,
    11889878, -14342155, 16834796, -19286742, 21603147, -23675771,
    25383457, -26592545, 27156922, -26917316, 25699214, -23308424,
    19522678, -14076551, 6634687, 3256263, -16256886, 33410017,
    -56511949, 88990761, -138333041, 224564365, -424946475, 1581216498,
    1122120025, -426198862, 260334326, -182302940, 134935914, -102021451,
    77246062, -57669066, 41750725, -28612418, 17715286, -8705096,
    1331302, 4597606, -9239617, 12733976, -15209616, 16789701,
    -17593709, 17737963, -17335187, 16493514, -15315208, 13895330,
    -12320492, 10667802, -9004090, 7385433, -5857023, 4453342,
    -3198662, 2107784, -1187022, 435327, 154464, -594336,
    899816, -1088734, 1180095, -1193068, 1146144, -1056453,
    939262, -807644, 672303, -541553, 421408, -315776,
    226723, -154784, 99287, -58691, 30889, -13492,
    18200, -18178, 10760, 7578, -40773, 92973,
    -168278, 270402, -402281, 565636, -760509, 984786,
    -1233752, 1499698, -1771607, 2034969, -2271738, 2460474,
    -2576679, 2593360, -2481806, 2212590, -1756776, 1087310,
    -180549, -982107, 2412540, -4114258, 6080816, -8294383,
    10724510, -13327151, 16043961, -18801903, 21513135, -24075133,
    26370953, -28269474, 29625364, -30278391, 30051485, -28746603,
    26136862, -21952271, 15854203, -7389241, -4097079, 19630415,
    -40970735, 71477540, -118522937, 202047257, -400936454, 1678515915,
    996544875, -405665320, 255877615, -183893801, 139527636, -108259000,
    84382195, -65231672, 49414536, -36141584, 24934721, -15484851,
    7577273, -1050254, -4228801, 8377257, -11505231, 13719909,
    -15127501, 15833687, -15943092, 15558169, -14777786, 13695702,
    -12399100, 10967287, -9470643, 7969869, -6515558, 5148105,
    -3897927, 2785978, -1824509, 1018028, -364404, -143940,
    518803, -775000, 929223, -998998, 1001787, -954233,
    871568, -767199, 652440, -536397, 425988, -326062,
    239601, -167991, 111314, -68659, 38424, -18593,
    24903, -28964, 26778, -14777, -11148, 55480,
    -122840, 217670, -343853, 504272, -700325, 931422,
    -1194486, 1483488, -1789049, 2098147, -2393959, 2655873,
    -2859693, 2978061, -2981119, 2837388, -2514889, 1982465,
    -1211281, 176465, 1141169, -2753366, 4662713, -6861022,
    9327872, -12029379, 14917213, -17927924, 20982537, -23986417,
    26829304, -29385396, 31513238, -33055077, 33835131, -33655874,
    32290911, -29471891, 24864891, -18027345, 8327007, 5218936,
    -24289378, 52088557, -95681109, 174394889, -366723170, 1766389312,
    869446318, -378283049, 246473134, -181753556, 141214860, -112202787,
    89703516, -71370042, 55980384, -42848939, 31567217, -21877104,
    13603867, -6618704, 817017, 3894355, -7604529, 10402575,
    -12379318, 13627684, -14242098, 14317280, -13946706, 13220938,
    -12225958, 11041654, -9740510, 8386590, -7034835, 5730688,
    -4510057, 3399573, -2417130, 1572650, -869030, 303212,
    132679, -450179, 663360, -787780, 839536, -834460,
    787455, -711994, 619768, -520493, 421843, -329498,
    247292, -177421, 120708, -76881, 44866, -23055,
    31391, -39565, 42784, -37509, 19536, 15872,
    -73772, 159258, -277095, 431284, -624569, 857917,
    -1129966, 1436507, -1770003, 2119196, -2468833, 2799551,
    -3087937, 3306819, -3425771, 3411876, -3230723, 2847641,
    -2229136, 1344509, -167595, -1321423, 3134186, -5272393,
    7726152, -10472508, 13474219, -16678797, 20017834, -23406608,
    26743899, -29911916, 32776121, -35184661, 36966900, -37930248,
    37853968, -36477649, 33480144, -28440774, 20765739, -9541005,
    -6785775, 31174406, -70179310, 141941188, -322178269, 1843784725,
    742232045, -344933482, 232479601, -176023335, 140025848, -113815166,
    93131786, -75980850, 61330241, -48609149, 37485610, -27756978,
    19291611, -11995982, 5795442, -622794, -3588362, 6907253,
    -9407541, 11167568, -12269692, 12799014, -12841755, 12483462,
    -11807187, 10891777, -9810345, 8629005, -7405906, 6190589,
    -5023687, 3936928, -2953442, 2088320, -1349383, 738109,
    -250665, -121011, 388121, -563962, 662970, -699863,
    688923, -643424, 575204, -494389, 409250, -326180,
    249773, -182987, 127357, -83248, 50126, -26815,
    37512, -49745, 58440, -60152, 50664, -25078,
    -22010, 96253, -203215, 347950, -534515, 765427,
    -1041090, 1359218, -1714285, 2097043, -2494128, 2887823,
    -3255978, 3572145, -3805938, 3923646, -3889092, 3664755,
    -3213116, 2498214, -1487371, 153033, 1525339, -3559377,
    5950001, -8685746, 11741307, -15076321, 18634442, -22342697,
    26111095, -29832397, 33381907, -36617000, 39375978, -41475548,
    42705762, -42820397, 41519073, -38413885, 32965479, -24354196,
    11199426, 9124430, -42452888, 105124766, -267317436, 1909770429,
    616283869, -306551725, 214329403, -166910337, 136045016, -113105546,
    94627841, -78992867, 65372054, -53317472, 42578584, -33011304,
    24529135, -17075341, 10606472, -5082478, 460879, 3306416,
    -6274503, 8505629, -10068481, 11036873, -11488067, 11500894,
    -11153819, 10523063, -9680893, 8694126, -7622927, 6519911,
    -5429582, 4388088, -3423289, 2555098, -1796058, 1152111,
    -623503, 205771, 109222, -332279, 475904, -553424,
    578228, -563132, 519888, -458829, 388654, -316334,
    247128, -184684, 131210, -87694, 54141, -29825,
    43113, -59269, 73399, -82226, 81598, -66549,
    31433, 29860, -123595, 255792, -431754, 655520,
    -929272, 1252714, -1622465, 2031488, -2468599, 2918095,
    -3359543, 3767756, -4112995, 4361421, -4475805, 4416499,
    -4142677, 3613794, -2791264, 1640284, -131760, -1755720,
    4033957, -6703303, 9750999, -13149737, 16856490, -20811641,
    24938395, -29142417, 33311588, -37315675, 41005558, -44211455,
    46739177, -48362742, 48810255, -47737074, 44673663, -38919395,
    29309228, -13640119, -12994162, 64484907, -202303764, 1963548390,
    492938961, -264110458, 192518400, -154682224, 129410128, -110129372,
    94191763, -80367935, 68041255, -56891607, 46752738, -37540769,
    29215336, -21757146, 15154497, -9395054, 4460942, -326037,
    -3045190, 5697730, -7685288, 9068966, -9915559, 10295638,
    -10281522, 9945296, -9356927, 8582589, -7683241, 6713493,
    -5720798, 4744966, -3817988, 2964160, -2200456, 1537120,
    -978432, 523585, -167631, -97549, 282300, -398314,
    457832, -472968, 455156, -414733, 360652, -300318,
    239543, -182585, 132276, -90194, 56880, -32061,
    48047, -67906, 87322, -103248, 111683, -107690,
    85485, -38617, -39765, 156541, -318171, 530154,
    -796425, 1118711, -1495864, 1923223, -2392028, 2888927,
    -3395626, 3888715, -4339706, 4715306, -4977968, 5086698,
    -4998152, 4667978, -4052408, 3110031, -1803717, 102626,
    2015772, -4563733, 7541408, -10935205, 14716410, -18840107,
    23244409, -27849977, 32559770, -37258872, 41814147, -46073295,
    49862585, -52981982, 55195342, -56211108, 55643933, -52935304,
    47177133, -36673702, 17655459, 20655689, -127448891, 2004465813,
    373471948, -218603609, 167594891, -139660498, 120308518, -104986231,
    91862277, -80101275, 69301709, -59273084, 49934255, -41261773,
    33261310, -25950820, 19350183, -13474746, 8331380, -3916292,
    214098, 2802138, -5170154, 6937183, -8158278, 8894375,
    -9210239, 9172389, -8847108, 8298603, -7587397, 6768985,
    -5892799, 5001483, -4130488, 3307968, -2554949, 1885736,
    -1308520, 826125, -436861, 135425, 86190, -237827,
    330352, -374947, 382510, -363178, 325980, -278606,
    227300, -176841, 130619, -90766, 58336, -33513,
    52175, -75438, 99878, -122744, 140267, -147634,
    139036, -107803, 46627, 52109, -195908, 391637,
    -644929, 959518, -1336540, 1773828, -2265245, 2800080,
    -3362566, 3931556, -4480391, 4977000, -5384266, 5660660,
    -5761167, 5638491, -5244516, 4532005, -3456478, 1978214,
    -64324, -2309198, 5155511, -8475129, 12254358, -16464031,
    21058582, -25975468, 31134925, -36439980, 41776576, -47013531,
    52001880, -56572773, 60532438, -63651310, 65641216, -66106653,
    64434306, -59514759, 48914492, -25641661, -43211863, 2032024619,
    259078152, -171030074, 140147951, -122213025, 108972425, -97817115,
    87715388, -78221115, 69146069, -60428155, 52070177, -44107940,
    36592016, -29576574, 23112218, -17241334, 11995159, -7392110,
    3437105, -121675, -2575296, 4686318, -6253667, 7327486,
    -7963731, 8222062, -8163771, 7849823, -7339100, 6686863,
    -5943518, 5153669, -4355491, 3580402, -2853023, 2191401,
    -1607434, 1107488, -693131, 361951, -108411, -75308,
    198500, -271206, 303581, -305368, 285491, -251776,
    210770, -167673, 126359, -89466, 58534, -34189,
    55370, -81659, 110755, -140259, 166710, -185517,
    190961, -176279, 133844, -55445, -67329, 242595,
    -477590, 778004, -1147259, 1585755, -2090125, 2652540,
    -3260103, 3894371, -4531066, 5139993, -5685214, 6125491,
    -6415032, 6504519, -6342426, 5876592, -5056024, 3832856,
    -2164423, 15364, 2640322, -5817357, 9517468, -13727969,
    18420701, -23551374, 29059353, -34867877, 40884680, -47002911,
    53102194, -59049485, 64699198, -69891511, 74446659, -78150255,
    80716920, -81694468, 80171384, -73608114, 49804281, 2045888672,
    150858204, -122377747, 110795367, -102745848, 95673544, -88800921,
    81862299, -74787673, 67595562, -60348176, 53129226, -46031270,
    39147648, -32566915, 26368872, -20621729, 15380182, -10684276,
    6558959, -3014254, 45970, 2363128, -4241777, 5628394,
    -6569065, 7115441, -7322629, 7247160, -6945102, 6470384,
    -5873370, 5199718, -4489541, 3776867, -3089395, 2448515,
    -1869564, 1362287, -931448, 577542, -297585, 85914,
    65028, -163958, 220098, -242608, 240141, -220499,
    190401, -155365, 119666, -86388, 57521, -34117,
];

pub static SRC_INT32_21_20_1250_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_20_1250_5000",
    input_stride: 19,
    output_stride: 20,
    subfilter_count: 21,
    subfilter_length: 16,
    block_in: 20,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_20_1250_5000_FIR),
};

static SRC_INT32_21_20_1250_5000_FIR: [i32; 336] = [
    11709, 2345767, -7521752, -9618747, 65396938, -57786940,
    -185564715, 623606813, 1341644826, 568857338, -196758615, -44543245,
    63031814, -11551452, -6479321, 2252968, 41674, 2412294,
    -8586400, -7399119, 67241830, -71353345, -171693458, 678326848,
    1337390229, 514367862, -205356414, -31729499, 60206502, -13198752,
    -5469919, 2138685, 81111, 2447622, -9661069, -4894461,
    68508060, -85125093, -155080188, 732722114, 1328907826, 460419886,
    -211454745, -19442360, 56981924, -14565317, -4502949, 2007500,
    130824, 2446744, -10732230, -2110319, 69139576, -98975254,
    -135677960, 786493521, 1316250982, 407285025, -215164297, -7767579,
    53419177, -15658692, -3586404, 1863738, 191490, 2404655,
    -11785090, 943908, 69083487, -112768024, -113458535, 839340405,
    1299499203, 355223167, -216608415, 3220213, 49578867, -16488996,
    -2726874, 1711429, 263625, 2316436, -12803690, 4254795,
    68290855, -126359532, -88413229, 890962760, 1278757486, 304480763,
    -215921632, 13457599, 45520489, -17068619, -1929582, 1554268,
    347557, 2177343, -13771018, 7804759, 66717489, -139598756,
    -60553618, 941063489, 1254155474, 255289261, -213248149, 22892356,
    41301850, -17411907, -1198433, 1395595, 443388, 1982902,
    -14669160, 11571962, 64324736, -152328548, -29912086, 989350667,
    1225846401, 207863685, -208740286, 31483335, 36978555, -17534844,
    -536074, 1238374, 550964, 1729016, -15479463, 15530277,
    61080258, -164386765, 3457795, 1035539773, 1194005859, 162401384,
    -202556907, 39200233, 32603537, -17454738, 56030, 1085185,
    669850, 1412064, -16182728, 19649282, 56958777, -175607490,
    39481061, 1079355897, 1158830384, 119080954, -194861846, 46023273,
    28226652, -17189917, 577512, 938223, 799298, 1029010,
    -16759423, 23894330, 51942797, -185822339, 78061328, 1120535880,
    1120535880, 78061328, -185822339, 51942797, 23894330, -16759423,
    1029010, 799298, 938223, 577512, -17189917, 28226652,
    46023273, -194861846, 119080954, 1158830384, 1079355897, 39481061,
    -175607490, 56958777, 19649282, -16182728, 1412064, 669850,
    1085185, 56030, -17454738, 32603537, 39200233, -202556907,
    162401384, 1194005859, 1035539773, 3457795, -164386765, 61080258,
    15530277, -15479463, 1729016, 550964, 1238374, -536074,
    -17534844, 36978555, 31483335, -208740286, 207863685, 1225846401,
    989350667, -29912086, -152328548, 64324736, 11571962, -14669160,
    1982902, 443388, 1395595, -1198433, -17411907, 41301850,
    22892356, -213248149, 255289261, 1254155474, 941063489, -60553618,
    -139598756, 66717489, 7804759, -13771018, 2177343, 347557,
    1554268, -1929582, -17068619, 45520489, 13457599, -215921632,
    304480763, 1278757486, 890962760, -88413229, -126359532, 68290855,
    4254795, -12803690, 2316436, 263625, 1711429, -2726874,
    -16488996, 49578867, 3220213, -216608415, 355223167, 1299499203,
    839340405, -113458535, -112768024, 69083487, 943908, -11785090,
    2404655, 191490, 1863738, -3586404, -15658692, 53419177,
    -7767579, -215164297, 407285025, 1316250982, 786493521, -135677960,
    -98975254, 69139576, -2110319, -10732230, 2446744, 130824,
    2007500, -4502949, -14565317, 56981924, -19442360, -211454745,
    460419886, 1328907826, 732722114, -155080188, -85125093, 68508060,
    -4894461, -9661069, 2447622, 81111, 2138685, -5469919,
    -13198752, 60206502, -31729499, -205356414, 514367862, 1337390229,
    678326848, -171693458, -71353345, 67241830, -7399119, -8586400,
    2412294, 41674, 2252968, -6479321, -11551452, 63031814,
    -44543245, -196758615, 568857338, 1341644826, 623606813, -185564715,
    -57786940, 65396938, -9618747, -7521752, 2345767, 11709,
];

pub static SRC_INT32_21_20_2500_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_20_2500_5000",
    input_stride: 19,
    output_stride: 20,
    subfilter_count: 21,
    subfilter_length: 24,
    block_in: 20,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_20_2500_5000_FIR),
};

static SRC_INT32_21_20_2500_5000_FIR: [i32; 504] = [
    9085, 624791, -2843036, 5010633, -767253, -16812985,
    43311005, -53024344, 6373637, 121718397, -312445120, 509581651,
    1609744796, 433153198, -303596890, 133056200, -6233982, -46318530,
    42260364, -18306021, 743586, 4314991, -2715443, 656479,
    30574, 577153, -2937603, 5685378, -2364539, -15003388,
    43824834, -59328867, 19467462, 108217069, -317653858, 587307665,
    1602811732, 358526420, -291415750, 142187817, -18215549, -39316040,
    40712168, -19479112, 2152397, 3609814, -2559537, 673371,
    56562, 512603, -2994592, 6327381, -4030452, -12885340,
    43768177, -65128212, 32895036, 92624278, -318940292, 665805243,
    1589001235, 286179225, -276228199, 149099282, -29445090, -32120809,
    38710471, -20333414, 3445942, 2905839, -2380099, 676779,
    87042, 430412, -3009705, 6924471, -5745062, -10471809,
    43113684, -70320666, 46492757, 75041858, -316049079, 744531102,
    1568424019, 216559318, -258376687, 153804314, -39811528, -24834761,
    36303315, -20874373, 4613381, 2213059, -2181903, 668131,
    121890, 330122, -2978988, 7464318, -7486514, -7780687,
    41841007, -74808177, 60087551, 55601458, -308755828, 822929514,
    1541244789, 150080559, -238215589, 156343014, -49219487, -17556553,
    33541893, -21111438, 5646287, 1540622, -1969632, 648938,
    160849, 211573, -2898927, 7934625, -9231236, -4834785,
    39937423, -78497850, 73498741, 34464225, -296870354, 900437318,
    1507680617, 87119726, -216107147, 156780311, -57589862, -10380414,
    30479719, -21057721, 6538637, 896745, -1747815, 620754,
    203530, 74943, -2766546, 8323319, -10954201, -1661756,
    37398364, -81303437, 86540078, 11820126, -280239626, 976489074,
    1467998812, 28013695, -192417455, 155204160, -64860164, -3395097,
    27171787, -20729630, 7286752, 288652, -1520757, 585149,
    249398, -79232, -2579496, 8618759, -12629215, 1706053,
    34227866, -83146796, 99021939, -12113085, -258750403, 1050522288,
    1422514289, -26942931, -167512498, 151723539, -70984634, 3317062,
    23673765, -20146469, 7889222, -277468, -1292491, 543670,
    297776, -250028, -2336144, 8809949, -14229242, 5231831,
    30438909, -83959308, 110753645, -37091260, -232331494, 1121982671,
    1371586490, -77499718, -141754316, 146466270, -75934146, 9680951,
    20041201, -19330019, 8346787, -796491, -1066732, 497818,
    347838, -436122, -2035655, 8886750, -15726763, 8874604,
    26053657, -83683214, 121545887, -62845609, -200955631, 1190329352,
    1315615874, -123451822, -115497319, 139576694, -79695890, 15629368,
    16328780, -18304106, 8662207, -1264357, -846836, 449023,
    398621, -635776, -1678067, 8840096, -17094157, 12589616,
    21103563, -82272870, 131213237, -89084789, -164640917, 1255040012,
    1255040012, -164640917, -89084789, 131213237, -82272870, 21103563,
    12589616, -17094157, 8840096, -1678067, -635776, 398621,
    449023, -846836, -1264357, 8662207, -18304106, 16328780,
    15629368, -79695890, 139576694, -115497319, -123451822, 1315615874,
    1190329352, -200955631, -62845609, 121545887, -83683214, 26053657,
    8874604, -15726763, 8886750, -2035655, -436122, 347838,
    497818, -1066732, -796491, 8346787, -19330019, 20041201,
    9680951, -75934146, 146466270, -141754316, -77499718, 1371586490,
    1121982671, -232331494, -37091260, 110753645, -83959308, 30438909,
    5231831, -14229242, 8809949, -2336144, -250028, 297776,
    543670, -1292491, -277468, 7889222, -20146469, 23673765,
    3317062, -70984634, 151723539, -167512498, -26942931, 1422514289,
    1050522288, -258750403, -12113085, 99021939, -83146796, 34227866,
    1706053, -12629215, 8618759, -2579496, -79232, 249398,
    585149, -1520757, 288652, 7286752, -20729630, 27171787,
    -3395097, -64860164, 155204160, -192417455, 28013695, 1467998812,
    976489074, -280239626, 11820126, 86540078, -81303437, 37398364,
    -1661756, -10954201, 8323319, -2766546, 74943, 203530,
    620754, -1747815, 896745, 6538637, -21057721, 30479719,
    -10380414, -57589862, 156780311, -216107147, 87119726, 1507680617,
    900437318, -296870354, 34464225, 73498741, -78497850, 39937423,
    -4834785, -9231236, 7934625, -2898927, 211573, 160849,
    648938, -1969632, 1540622, 5646287, -21111438, 33541893,
    -17556553, -49219487, 156343014, -238215589, 150080559, 1541244789,
    822929514, -308755828, 55601458, 60087551, -74808177, 41841007,
    -7780687, -7486514, 7464318, -2978988, 330122, 121890,
    668131, -2181903, 2213059, 4613381, -20874373, 36303315,
    -24834761, -39811528, 153804314, -258376687, 216559318, 1568424019,
    744531102, -316049079, 75041858, 46492757, -70320666, 43113684,
    -10471809, -5745062, 6924471, -3009705, 430412, 87042,
    676779, -2380099, 2905839, 3445942, -20333414, 38710471,
    -32120809, -29445090, 149099282, -276228199, 286179225, 1589001235,
    665805243, -318940292, 92624278, 32895036, -65128212, 43768177,
    -12885340, -4030452, 6327381, -2994592, 512603, 56562,
    673371, -2559537, 3609814, 2152397, -19479112, 40712168,
    -39316040, -18215549, 142187817, -291415750, 358526420, 1602811732,
    587307665, -317653858, 108217069, 19467462, -59328867, 43824834,
    -15003388, -2364539, 5685378, -2937603, 577153, 30574,
    656479, -2715443, 4314991, 743586, -18306021, 42260364,
    -46318530, -6233982, 133056200, -303596890, 433153198, 1609744796,
    509581651, -312445120, 121718397, 6373637, -53024344, 43311005,
    -16812985, -767253, 5010633, -2843036, 624791, 9085,
];

pub static SRC_INT32_21_20_3125_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_20_3125_5000",
    input_stride: 19,
    output_stride: 20,
    subfilter_count: 21,
    subfilter_length: 28,
    block_in: 20,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_20_3125_5000_FIR),
};

static SRC_INT32_21_20_3125_5000_FIR: [i32; 588] = [
    -123749, 653613, -1370571, 1033489, 2576822, -11194930,
    23366876, -32057312, 24894280, 11511359, -84272911, 187851022,
    -303860463, 416175954, 1743738043, 329986102, -281107589, 188390708,
    -93371619, 21250390, 18156064, -28936808, 22834416, -11835005,
    3363871, 530645, -1162910, 602394, -128051, 697843,
    -1572202, 1554783, 1700284, -10342354, 23556308, -34811610,
    31517031, 1217368, -73519332, 184399177, -323211893, 504957450,
    1735013772, 247018696, -255446169, 186131912, -100744236, 30310335,
    11407792, -25512227, 21982359, -12263247, 4054100, 53176,
    -953226, 545865, -129114, 733384, -1763586, 2086811,
    743533, -9280079, 23383740, -37140778, 37916555, -9494160,
    -61209916, 177959291, -338687844, 595659487, 1717645549, 167858220,
    -227381551, 181223104, -106347393, 38581730, 4751021, -21847810,
    20838037, -12483611, 4642133, -392857, -745263, 485660,
    -126394, 758554, -1940361, 2621153, -282264, -8014498,
    22835168, -38990164, 43984348, -20474127, -47471082, 168495859,
    -349839490, 687577214, 1691793116, 93037443, -197425134, 173844188,
    -110165189, 45970876, -1717945, -18008847, 19432083, -12503122,
    5124534, -802302, -542449, 423332, -119385, 771730,
    -2098098, 3148787, -1364133, -6555669, 21902006, -40310440,
    49612833, -31563621, -32455760, 156015864, -356249416, 779979079,
    1657693847, 23032691, -166088066, 164202824, -112208436, 52400665,
    -7909317, -14060624, 17797811, -12331611, 5499758, -1170948,
    -347859, 360331, -107635, 771380, -2232375, 3660217,
    -2487417, -4917332, 20581474, -41058609, 54697086, -42595992,
    -16342109, 140570389, -357537578, 872114252, 1615660097, -41740156,
    -133875111, 152530502, -112513537, 57811131, -13740933, -10067419,
    15970573, -11981427, 5768071, -1495542, -164185, 297983,
    -90766, 756112, -2338866, 4145607, -3635930, -3116856,
    18876894, -41198950, 59136581, -53399128, 668188, 122255674,
    -353366961, 963220371, 1566075719, -100928909, -101278773, 139078432,
    -111141040, 62159723, -19139225, -6091554, 13987121, -11467111,
    5931447, -1773777, 6289, 237473, -68488, 724710,
    -2413425, 4594942, -4792151, -1175134, 16797909, -40703882,
    62836936, -63797887, 18352039, 101213605, -343448841, 1052531498,
    1509391785, -154247534, -68773725, 124113299, -108173882, 65421313,
    -24040004, -2192512, 11884964, -10805059, 5993444, -2004280,
    161691, 179833, -40617, 676176, -2452183, 4998185,
    -5937450, 883593, 14360610, -39554736, 65711624, -73616676,
    36467448, 77631604, -327547577, 1139286204, 1446121575, -201477792,
    -36811625, 107912951, -103715374, 67587936, -28389087, 1573868,
    9701748, -10013169, 5959050, -2186569, 300574, 125935,
    -7092, 609771, -2451637, 5345462, -7052346, 3031977,
    11587550, -37742413, 67683623, -82682117, 54756384, 51741897,
    -305484879, 1222735679, 1376834894, -242470084, -5816368, 90762085,
    -97886960, 68668287, -32142732, 5156100, 7474661, -9110474,
    5834530, -2321008, 421905, 76482, 32015, 525052,
    -2408743, 5627243, -8116789, 5239865, 8507670, -35267915,
    68686985, -90825784, 72947988, 23820177, -277143468, 1302151778,
    1302151778, -277143468, 23820177, 72947988, -90825784, 68686985,
    -35267915, 8507670, 5239865, -8116789, 5627243, -2408743,
    525052, 32015, 76482, 421905, -2321008, 5834530,
    -9110474, 7474661, 5156100, -32142732, 68668287, -97886960,
    90762085, -5816368, -242470084, 1376834894, 1222735679, -305484879,
    51741897, 54756384, -82682117, 67683623, -37742413, 11587550,
    3031977, -7052346, 5345462, -2451637, 609771, -7092,
    125935, 300574, -2186569, 5959050, -10013169, 9701748,
    1573868, -28389087, 67587936, -103715374, 107912951, -36811625,
    -201477792, 1446121575, 1139286204, -327547577, 77631604, 36467448,
    -73616676, 65711624, -39554736, 14360610, 883593, -5937450,
    4998185, -2452183, 676176, -40617, 179833, 161691,
    -2004280, 5993444, -10805059, 11884964, -2192512, -24040004,
    65421313, -108173882, 124113299, -68773725, -154247534, 1509391785,
    1052531498, -343448841, 101213605, 18352039, -63797887, 62836936,
    -40703882, 16797909, -1175134, -4792151, 4594942, -2413425,
    724710, -68488, 237473, 6289, -1773777, 5931447,
    -11467111, 13987121, -6091554, -19139225, 62159723, -111141040,
    139078432, -101278773, -100928909, 1566075719, 963220371, -353366961,
    122255674, 668188, -53399128, 59136581, -41198950, 18876894,
    -3116856, -3635930, 4145607, -2338866, 756112, -90766,
    297983, -164185, -1495542, 5768071, -11981427, 15970573,
    -10067419, -13740933, 57811131, -112513537, 152530502, -133875111,
    -41740156, 1615660097, 872114252, -357537578, 140570389, -16342109,
    -42595992, 54697086, -41058609, 20581474, -4917332, -2487417,
    3660217, -2232375, 771380, -107635, 360331, -347859,
    -1170948, 5499758, -12331611, 17797811, -14060624, -7909317,
    52400665, -112208436, 164202824, -166088066, 23032691, 1657693847,
    779979079, -356249416, 156015864, -32455760, -31563621, 49612833,
    -40310440, 21902006, -6555669, -1364133, 3148787, -2098098,
    771730, -119385, 423332, -542449, -802302, 5124534,
    -12503122, 19432083, -18008847, -1717945, 45970876, -110165189,
    173844188, -197425134, 93037443, 1691793116, 687577214, -349839490,
    168495859, -47471082, -20474127, 43984348, -38990164, 22835168,
    -8014498, -282264, 2621153, -1940361, 758554, -126394,
    485660, -745263, -392857, 4642133, -12483611, 20838037,
    -21847810, 4751021, 38581730, -106347393, 181223104, -227381551,
    167858220, 1717645549, 595659487, -338687844, 177959291, -61209916,
    -9494160, 37916555, -37140778, 23383740, -9280079, 743533,
    2086811, -1763586, 733384, -129114, 545865, -953226,
    53176, 4054100, -12263247, 21982359, -25512227, 11407792,
    30310335, -100744236, 186131912, -255446169, 247018696, 1735013772,
    504957450, -323211893, 184399177, -73519332, 1217368, 31517031,
    -34811610, 23556308, -10342354, 1700284, 1554783, -1572202,
    697843, -128051, 602394, -1162910, 530645, 3363871,
    -11835005, 22834416, -28936808, 18156064, 21250390, -93371619,
    188390708, -281107589, 329986102, 1743738043, 416175954, -303860463,
    187851022, -84272911, 11511359, 24894280, -32057312, 23366876,
    -11194930, 2576822, 1033489, -1370571, 653613, -123749,
];

pub static SRC_INT32_21_20_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_20_4535_5000",
    input_stride: 19,
    output_stride: 20,
    subfilter_count: 21,
    subfilter_length: 108,
    block_in: 20,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_20_4535_5000_FIR),
};

static SRC_INT32_21_20_4535_5000_FIR: [i32; 2268] = [
    -34117, 57521, -86388, 119666, -155365, 190401,
    -220499, 240141, -242608, 220098, -163958, 65028,
    85914, -297585, 577542, -931448, 1362287, -1869564,
    2448515, -3089395, 3776867, -4489541, 5199718, -5873370,
    6470384, -6945102, 7247160, -7322629, 7115441, -6569065,
    5628394, -4241777, 2363128, 45970, -3014254, 6558959,
    -10684276, 15380182, -20621729, 26368872, -32566915, 39147648,
    -46031270, 53129226, -60348176, 67595562, -74787673, 81862299,
    -88800921, 95673544, -102745848, 110795367, -122377747, 150858204,
    2045888672, 49804281, -73608114, 80171384, -81694468, 80716920,
    -78150255, 74446659, -69891511, 64699198, -59049485, 53102194,
    -47002911, 40884680, -34867877, 29059353, -23551374, 18420701,
    -13727969, 9517468, -5817357, 2640322, 15364, -2164423,
    3832856, -5056024, 5876592, -6342426, 6504519, -6415032,
    6125491, -5685214, 5139993, -4531066, 3894371, -3260103,
    2652540, -2090125, 1585755, -1147259, 778004, -477590,
    242595, -67329, -55445, 133844, -176279, 190961,
    -185517, 166710, -140259, 110755, -81659, 55370,
    -34189, 58534, -89466, 126359, -167673, 210770,
    -251776, 285491, -305368, 303581, -271206, 198500,
    -75308, -108411, 361951, -693131, 1107488, -1607434,
    2191401, -2853023, 3580402, -4355491, 5153669, -5943518,
    6686863, -7339100, 7849823, -8163771, 8222062, -7963731,
    7327486, -6253667, 4686318, -2575296, -121675, 3437105,
    -7392110, 11995159, -17241334, 23112218, -29576574, 36592016,
    -44107940, 52070177, -60428155, 69146069, -78221115, 87715388,
    -97817115, 108972425, -122213025, 140147951, -171030074, 259078152,
    2032024619, -43211863, -25641661, 48914492, -59514759, 64434306,
    -66106653, 65641216, -63651310, 60532438, -56572773, 52001880,
    -47013531, 41776576, -36439980, 31134925, -25975468, 21058582,
    -16464031, 12254358, -8475129, 5155511, -2309198, -64324,
    1978214, -3456478, 4532005, -5244516, 5638491, -5761167,
    5660660, -5384266, 4977000, -4480391, 3931556, -3362566,
    2800080, -2265245, 1773828, -1336540, 959518, -644929,
    391637, -195908, 52109, 46627, -107803, 139036,
    -147634, 140267, -122744, 99878, -75438, 52175,
    -33513, 58336, -90766, 130619, -176841, 227300,
    -278606, 325980, -363178, 382510, -374947, 330352,
    -237827, 86190, 135425, -436861, 826125, -1308520,
    1885736, -2554949, 3307968, -4130488, 5001483, -5892799,
    6768985, -7587397, 8298603, -8847108, 9172389, -9210239,
    8894375, -8158278, 6937183, -5170154, 2802138, 214098,
    -3916292, 8331380, -13474746, 19350183, -25950820, 33261310,
    -41261773, 49934255, -59273084, 69301709, -80101275, 91862277,
    -104986231, 120308518, -139660498, 167594891, -218603609, 373471948,
    2004465813, -127448891, 20655689, 17655459, -36673702, 47177133,
    -52935304, 55643933, -56211108, 55195342, -52981982, 49862585,
    -46073295, 41814147, -37258872, 32559770, -27849977, 23244409,
    -18840107, 14716410, -10935205, 7541408, -4563733, 2015772,
    102626, -1803717, 3110031, -4052408, 4667978, -4998152,
    5086698, -4977968, 4715306, -4339706, 3888715, -3395626,
    2888927, -2392028, 1923223, -1495864, 1118711, -796425,
    530154, -318171, 156541, -39765, -38617, 85485,
    -107690, 111683, -103248, 87322, -67906, 48047,
    -32061, 56880, -90194, 132276, -182585, 239543,
    -300318, 360652, -414733, 455156, -472968, 457832,
    -398314, 282300, -97549, -167631, 523585, -978432,
    1537120, -2200456, 2964160, -3817988, 4744966, -5720798,
    6713493, -7683241, 8582589, -9356927, 9945296, -10281522,
    10295638, -9915559, 9068966, -7685288, 5697730, -3045190,
    -326037, 4460942, -9395054, 15154497, -21757146, 29215336,
    -37540769, 46752738, -56891607, 68041255, -80367935, 94191763,
    -110129372, 129410128, -154682224, 192518400, -264110458, 492938961,
    1963548390, -202303764, 64484907, -12994162, -13640119, 29309228,
    -38919395, 44673663, -47737074, 48810255, -48362742, 46739177,
    -44211455, 41005558, -37315675, 33311588, -29142417, 24938395,
    -20811641, 16856490, -13149737, 9750999, -6703303, 4033957,
    -1755720, -131760, 1640284, -2791264, 3613794, -4142677,
    4416499, -4475805, 4361421, -4112995, 3767756, -3359543,
    2918095, -2468599, 2031488, -1622465, 1252714, -929272,
    655520, -431754, 255792, -123595, 29860, 31433,
    -66549, 81598, -82226, 73399, -59269, 43113,
    -29825, 54141, -87694, 131210, -184684, 247128,
    -316334, 388654, -458829, 519888, -563132, 578228,
    -553424, 475904, -332279, 109222, 205771, -623503,
    1152111, -1796058, 2555098, -3423289, 4388088, -5429582,
    6519911, -7622927, 8694126, -9680893, 10523063, -11153819,
    11500894, -11488067, 11036873, -10068481, 8505629, -6274503,
    3306416, 460879, -5082478, 10606472, -17075341, 24529135,
    -33011304, 42578584, -53317472, 65372054, -78992867, 94627841,
    -113105546, 136045016, -166910337, 214329403, -306551725, 616283869,
    1909770429, -267317436, 105124766, -42452888, 9124430, 11199426,
    -24354196, 32965479, -38413885, 41519073, -42820397, 42705762,
    -41475548, 39375978, -36617000, 33381907, -29832397, 26111095,
    -22342697, 18634442, -15076321, 11741307, -8685746, 5950001,
    -3559377, 1525339, 153033, -1487371, 2498214, -3213116,
    3664755, -3889092, 3923646, -3805938, 3572145, -3255978,
    2887823, -2494128, 2097043, -1714285, 1359218, -1041090,
    765427, -534515, 347950, -203215, 96253, -22010,
    -25078, 50664, -60152, 58440, -49745, 37512,
    -26815, 50126, -83248, 127357, -182987, 249773,
    -326180, 409250, -494389, 575204, -643424, 688923,
    -699863, 662970, -563962, 388121, -121011, -250665,
    738109, -1349383, 2088320, -2953442, 3936928, -5023687,
    6190589, -7405906, 8629005, -9810345, 10891777, -11807187,
    12483462, -12841755, 12799014, -12269692, 11167568, -9407541,
    6907253, -3588362, -622794, 5795442, -11995982, 19291611,
    -27756978, 37485610, -48609149, 61330241, -75980850, 93131786,
    -113815166, 140025848, -176023335, 232479601, -344933482, 742232045,
    1843784725, -322178269, 141941188, -70179310, 31174406, -6785775,
    -9541005, 20765739, -28440774, 33480144, -36477649, 37853968,
    -37930248, 36966900, -35184661, 32776121, -29911916, 26743899,
    -23406608, 20017834, -16678797, 13474219, -10472508, 7726152,
    -5272393, 3134186, -1321423, -167595, 1344509, -2229136,
    2847641, -3230723, 3411876, -3425771, 3306819, -3087937,
    2799551, -2468833, 2119196, -1770003, 1436507, -1129966,
    857917, -624569, 431284, -277095, 159258, -73772,
    15872, 19536, -37509, 42784, -39565, 31391,
    -23055, 44866, -76881, 120708, -177421, 247292,
    -329498, 421843, -520493, 619768, -711994, 787455,
    -834460, 839536, -787780, 663360, -450179, 132679,
    303212, -869030, 1572650, -2417130, 3399573, -4510057,
    5730688, -7034835, 8386590, -9740510, 11041654, -12225958,
    13220938, -13946706, 14317280, -14242098, 13627684, -12379318,
    10402575, -7604529, 3894355, 817017, -6618704, 13603867,
    -21877104, 31567217, -42848939, 55980384, -71370042, 89703516,
    -112202787, 141214860, -181753556, 246473134, -378283049, 869446318,
    1766389312, -366723170, 174394889, -95681109, 52088557, -24289378,
    5218936, 8327007, -18027345, 24864891, -29471891, 32290911,
    -33655874, 33835131, -33055077, 31513238, -29385396, 26829304,
    -23986417, 20982537, -17927924, 14917213, -12029379, 9327872,
    -6861022, 4662713, -2753366, 1141169, 176465, -1211281,
    1982465, -2514889, 2837388, -2981119, 2978061, -2859693,
    2655873, -2393959, 2098147, -1789049, 1483488, -1194486,
    931422, -700325, 504272, -343853, 217670, -122840,
    55480, -11148, -14777, 26778, -28964, 24903,
    -18593, 38424, -68659, 111314, -167991, 239601,
    -326062, 425988, -536397, 652440, -767199, 871568,
    -954233, 1001787, -998998, 929223, -775000, 518803,
    -143940, -364404, 1018028, -1824509, 2785978, -3897927,
    5148105, -6515558, 7969869, -9470643, 10967287, -12399100,
    13695702, -14777786, 15558169, -15943092, 15833687, -15127501,
    13719909, -11505231, 8377257, -4228801, -1050254, 7577273,
    -15484851, 24934721, -36141584, 49414536, -65231672, 84382195,
    -108259000, 139527636, -183893801, 255877615, -405665320, 996544875,
    1678515915, -400936454, 202047257, -118522937, 71477540, -40970735,
    19630415, -4097079, -7389241, 15854203, -21952271, 26136862,
    -28746603, 30051485, -30278391, 29625364, -28269474, 26370953,
    -24075133, 21513135, -18801903, 16043961, -13327151, 10724510,
    -8294383, 6080816, -4114258, 2412540, -982107, -180549,
    1087310, -1756776, 2212590, -2481806, 2593360, -2576679,
    2460474, -2271738, 2034969, -1771607, 1499698, -1233752,
    984786, -760509, 565636, -402281, 270402, -168278,
    92973, -40773, 7578, 10760, -18178, 18200,
    -13492, 30889, -58691, 99287, -154784, 226723,
    -315776, 421408, -541553, 672303, -807644, 939262,
    -1056453, 1146144, -1193068, 1180095, -1088734, 899816,
    -594336, 154464, 435327, -1187022, 2107784, -3198662,
    4453342, -5857023, 7385433, -9004090, 10667802, -12320492,
    13895330, -15315208, 16493514, -17335187, 17737963, -17593709,
    16789701, -15209616, 12733976, -9239617, 4597606, 1331302,
    -8705096, 17715286, -28612418, 41750725, -57669066, 77246062,
    -102021451, 134935914, -182302940, 260334326, -426198862, 1122120025,
    1581216498, -424946475, 224564365, -138333041, 88990761, -56511949,
    33410017, -16256886, 3256263, 6634687, -14076551, 19522678,
    -23308424, 25699214, -26917316, 27156922, -26592545, 25383457,
    -23675771, 21603147, -19286742, 16834796, -14342155, 11889878,
    -9545061, 7360943, -5377306, 3621185, -2107853, 842042,
    180653, -972243, 1550754, -1938637, 2161238, -2245369,
    2218032, -2105331, 1931573, -1718599, 1485307, -1247395,
    1017283, -804191, 614358, -451363, 316507, -209249,
    127642, -68763, 29109, -4939, -7437, 11434,
    -7833, 22380, -47127, 84798, -137969, 208793,
    -298690, 407999, -535625, 678689, -832209, 988842,
    -1138708, 1269334, -1365721, 1410586, -1384768, 1267817,
    -1038773, 677116, -163867, -517172, 1378101, -2425549,
    3659327, -5071132, 6643385, -8348258, 10146924, -11989101,
    13812898, -15544990, 17101114, -18386842, 19298593, -19724750,
    19546767, -18640037, 16874234, -14112710, 10210335, -5008818,
    -1672003, 10049521, -20405060, 33130892, -48816009, 68411463,
    -93574923, 127469331, -176910384, 259567368, -439071528, 1244757558,
    1475648127, -439020122, 241719131, -154808541, 104322337, -70623713,
    46291559, -27911713, 13694630, -2605152, -6007836, 12587046,
    -17456872, 20872192, -23045739, 24163630, -24394072, 23891988,
    -22801193, 21255077, -19376467, 17277052, -15056687, 12802737,
    -10589625, 8478628, -6517985, 4743319, -3178348, 1835880,
    -719012, -177494, 865741, -1363172, 1691070, -1873126,
    1934117, -1898747, 1790659, -1631653, 1441103, -1235573,
    1028624, -830790, 649696, -490296, 355194, -245023,
    158851, -94594, 49401, -20007, 3039, 4750,
    -1715, 13041, -34157, 68075, -117796, 186052,
    -274994, 385840, -518501, 671195, -840085, 1018954,
    -1198956, 1368467, -1513061, 1615643, -1656754, 1615060,
    -1468044, 1192877, -767474, 171710, 611253, -1593551,
    2781169, -4172532, 5757166, -7514512, 9412950, -11409058,
    13447180, -15459302, 17365245, -19073160, 20480268, -21473752,
    21931670, -21723676, 20711266, -18747121, 15672914, -11314598,
    5473606, 2088772, -11678720, 23718327, -38834468, 58031106,
    -83050488, 117216064, -167719309, 253391594, -443555299, 1363056377,
    1363056377, -443555299, 253391594, -167719309, 117216064, -83050488,
    58031106, -38834468, 23718327, -11678720, 2088772, 5473606,
    -11314598, 15672914, -18747121, 20711266, -21723676, 21931670,
    -21473752, 20480268, -19073160, 17365245, -15459302, 13447180,
    -11409058, 9412950, -7514512, 5757166, -4172532, 2781169,
    -1593551, 611253, 171710, -767474, 1192877, -1468044,
    1615060, -1656754, 1615643, -1513061, 1368467, -1198956,
    1018954, -840085, 671195, -518501, 385840, -274994,
    186052, -117796, 68075, -34157, 13041, -1715,
    4750, 3039, -20007, 49401, -94594, 158851,
    -245023, 355194, -490296, 649696, -830790, 1028624,
    -1235573, 1441103, -1631653, 1790659, -1898747, 1934117,
    -1873126, 1691070, -1363172, 865741, -177494, -719012,
    1835880, -3178348, 4743319, -6517985, 8478628, -10589625,
    12802737, -15056687, 17277052, -19376467, 21255077, -22801193,
    23891988, -24394072, 24163630, -23045739, 20872192, -17456872,
    12587046, -6007836, -2605152, 13694630, -27911713, 46291559,
    -70623713, 104322337, -154808541, 241719131, -439020122, 1475648127,
    1244757558, -439071528, 259567368, -176910384, 127469331, -93574923,
    68411463, -48816009, 33130892, -20405060, 10049521, -1672003,
    -5008818, 10210335, -14112710, 16874234, -18640037, 19546767,
    -19724750, 19298593, -18386842, 17101114, -15544990, 13812898,
    -11989101, 10146924, -8348258, 6643385, -5071132, 3659327,
    -2425549, 1378101, -517172, -163867, 677116, -1038773,
    1267817, -1384768, 1410586, -1365721, 1269334, -1138708,
    988842, -832209, 678689, -535625, 407999, -298690,
    208793, -137969, 84798, -47127, 22380, -7833,
    11434, -7437, -4939, 29109, -68763, 127642,
    -209249, 316507, -451363, 614358, -804191, 1017283,
    -1247395, 1485307, -1718599, 1931573, -2105331, 2218032,
    -2245369, 2161238, -1938637, 1550754, -972243, 180653,
    842042, -2107853, 3621185, -5377306, 7360943, -9545061,
    11889878, -14342155, 16834796, -19286742, 21603147, -23675771,
    25383457, -26592545, 27156922, -26917316, 25699214, -23308424,
    19522678, -14076551, 6634687, 3256263, -16256886, 33410017,
    -56511949, 88990761, -138333041, 224564365, -424946475, 1581216498,
    1122120025, -426198862, 260334326, -182302940, 134935914, -102021451,
    77246062, -57669066, 41750725, -28612418, 17715286, -8705096,
    1331302, 4597606, -9239617, 12733976, -15209616, 16789701,
    -17593709, 17737963, -17335187, 16493514, -15315208, 13895330,
    -12320492, 10667802, -9004090, 7385433, -5857023, 4453342,
    -3198662, 2107784, -1187022, 435327, 154464, -594336,
    899816, -1088734, 1180095, -1193068, 1146144, -1056453,
    939262, -807644, 672303, -541553, 421408, -315776,
    226723, -154784, 99287, -58691, 30889, -13492,
    18200, -18178, 10760, 7578, -40773, 92973,
    -168278, 270402, -402281, 565636, -760509, 984786,
    -1233752, 1499698, -1771607, 2034969, -2271738, 2460474,
    -2576679, 2593360, -2481806, 2212590, -1756776, 1087310,
    -180549, -982107, 2412540, -4114258, 6080816, -8294383,
    10724510, -13327151, 16043961, -18801903, 21513135, -24075133,
    26370953, -28269474, 29625364, -30278391, 30051485, -28746603,
    26136862, -21952271, 15854203, -7389241, -4097079, 19630415,
    -40970735, 71477540, -118522937, 202047257, -400936454, 1678515915,
    996544875, -405665320, 255877615, -183893801, 139527636, -108259000,
    84382195, -65231672, 49414536, -36141584, 24934721, -15484851,
    7577273, -1050254, -4228801, 8377257, -11505231, 13719909,
    -15127501, 15833687, -15943092, 15558169, -14777786, 13695702,
    -12399100, 10967287, -9470643, 7969869, -6515558, 5148105,
    -3897927, 2785978, -1824509, 1018028, -364404, -143940,
    518803, -775000, 929223, -998998, 1001787, -954233,
    871568, -767199, 652440, -536397, 425988, -326062,
    239601, -167991, 111314, -68659, 38424, -18593,
    24903, -28964, 26778, -14777, -11148, 55480,
    -122840, 217670, -343853, 504272, -700325, 931422,
    -1194486, 1483488, -1789049, 2098147, -2393959, 2655873,
    -2859693, 2978061, -2981119, 2837388, -2514889, 1982465,
    -1211281, 176465, 1141169, -2753366, 4662713, -6861022,
    9327872, -12029379, 14917213, -17927924, 20982537, -23986417,
    26829304, -29385396, 31513238, -33055077, 33835131, -33655874,
    32290911, -29471891, 24864891, -18027345, 8327007, 5218936,
    -24289378, 52088557, -95681109, 174394889, -366723170, 1766389312,
    869446318, -378283049, 246473134, -181753556, 141214860, -112202787,
    89703516, -71370042, 55980384, -42848939, 31567217, -21877104,
    13603867, -6618704, 817017, 3894355, -7604529, 10402575,
    -12379318, 13627684, -14242098, 14317280, -13946706, 13220938,
    -12225958, 11041654, -9740510, 8386590, -7034835, 5730688,
    -4510057, 3399573, -2417130, 1572650, -869030, 303212,
    132679, -450179, 663360, -787780, 839536, -834460,
    787455, -711994, 619768, -520493, 421843, -329498,
    247292, -177421, 120708, -76881, 44866, -23055,
    31391, -39565, 42784, -37509, 19536, 15872,
    -73772, 159258, -277095, 431284, -624569, 857917,
    -1129966, 1436507, -1770003, 2119196, -2468833, 2799551,
    -3087937, 3306819, -3425771, 3411876, -3230723, 2847641,
    -2229136, 1344509, -167595, -1321423, 3134186, -5272393,
    7726152, -10472508, 13474219, -16678797, 20017834, -23406608,
    26743899, -29911916, 32776121, -35184661, 36966900, -37930248,
    37853968, -36477649, 33480144, -28440774, 20765739, -9541005,
    -6785775, 31174406, -70179310, 141941188, -322178269, 1843784725,
    742232045, -344933482, 232479601, -176023335, 140025848, -113815166,
    93131786, -75980850, 61330241, -48609149, 37485610, -27756978,
    19291611, -11995982, 5795442, -622794, -3588362, 6907253,
    -9407541, 11167568, -12269692, 12799014, -12841755, 12483462,
    -11807187, 10891777, -9810345, 8629005, -7405906, 6190589,
    -5023687, 3936928, -2953442, 2088320, -1349383, 738109,
    -250665, -121011, 388121, -563962, 662970, -699863,
    688923, -643424, 575204, -494389, 409250, -326180,
    249773, -182987, 127357, -83248, 50126, -26815,
    37512, -49745, 58440, -60152, 50664, -25078,
    -22010, 96253, -203215, 347950, -534515, 765427,
    -1041090, 1359218, -1714285, 2097043, -2494128, 2887823,
    -3255978, 3572145, -3805938, 3923646, -3889092, 3664755,
    -3213116, 2498214, -1487371, 153033, 1525339, -3559377,
    5950001, -8685746, 11741307, -15076321, 18634442, -22342697,
    26111095, -29832397, 33381907, -36617000, 39375978, -41475548,
    42705762, -42820397, 41519073, -38413885, 32965479, -24354196,
    11199426, 9124430, -42452888, 105124766, -267317436, 1909770429,
    616283869, -306551725, 214329403, -166910337, 136045016, -113105546,
    94627841, -78992867, 65372054, -53317472, 42578584, -33011304,
    24529135, -17075341, 10606472, -5082478, 460879, 3306416,
    -6274503, 8505629, -10068481, 11036873, -11488067, 11500894,
    -11153819, 10523063, -9680893, 8694126, -7622927, 6519911,
    -5429582, 4388088, -3423289, 2555098, -1796058, 1152111,
    -623503, 205771, 109222, -332279, 475904, -553424,
    578228, -563132, 519888, -458829, 388654, -316334,
    247128, -184684, 131210, -87694, 54141, -29825,
    43113, -59269, 73399, -82226, 81598, -66549,
    31433, 29860, -123595, 255792, -431754, 655520,
    -929272, 1252714, -1622465, 2031488, -2468599, 2918095,
    -3359543, 3767756, -4112995, 4361421, -4475805, 4416499,
    -4142677, 3613794, -2791264, 1640284, -131760, -1755720,
    4033957, -6703303, 9750999, -13149737, 16856490, -20811641,
    24938395, -29142417, 33311588, -37315675, 41005558, -44211455,
    46739177, -48362742, 48810255, -47737074, 44673663, -38919395,
    29309228, -13640119, -12994162, 64484907, -202303764, 1963548390,
    492938961, -264110458, 192518400, -154682224, 129410128, -110129372,
    94191763, -80367935, 68041255, -56891607, 46752738, -37540769,
    29215336, -21757146, 15154497, -9395054, 4460942, -326037,
    -3045190, 5697730, -7685288, 9068966, -9915559, 10295638,
    -10281522, 9945296, -9356927, 8582589, -7683241, 6713493,
    -5720798, 4744966, -3817988, 2964160, -2200456, 1537120,
    -978432, 523585, -167631, -97549, 282300, -398314,
    457832, -472968, 455156, -414733, 360652, -300318,
    239543, -182585, 132276, -90194, 56880, -32061,
    48047, -67906, 87322, -103248, 111683, -107690,
    85485, -38617, -39765, 156541, -318171, 530154,
    -796425, 1118711, -1495864, 1923223, -2392028, 2888927,
    -3395626, 3888715, -4339706, 4715306, -4977968, 5086698,
    -4998152, 4667978, -4052408, 3110031, -1803717, 102626,
    2015772, -4563733, 7541408, -10935205, 14716410, -18840107,
    23244409, -27849977, 32559770, -37258872, 41814147, -46073295,
    49862585, -52981982, 55195342, -56211108, 55643933, -52935304,
    47177133, -36673702, 17655459, 20655689, -127448891, 2004465813,
    373471948, -218603609, 167594891, -139660498, 120308518, -104986231,
    91862277, -80101275, 69301709, -59273084, 49934255, -41261773,
    33261310, -25950820, 19350183, -13474746, 8331380, -3916292,
    214098, 2802138, -5170154, 6937183, -8158278, 8894375,
    -9210239, 9172389, -8847108, 8298603, -7587397, 6768985,
    -5892799, 5001483, -4130488, 3307968, -2554949, 1885736,
    -1308520, 826125, -436861, 135425, 86190, -237827,
    330352, -374947, 382510, -363178, 325980, -278606,
    227300, -176841, 130619, -90766, 58336, -33513,
    52175, -75438, 99878, -122744, 140267, -147634,
    139036, -107803, 46627, 52109, -195908, 391637,
    -644929, 959518, -1336540, 1773828, -2265245, 2800080,
    -3362566, 3931556, -4480391, 4977000, -5384266, 5660660,
    -5761167, 5638491, -5244516, 4532005, -3456478, 1978214,
    -64324, -2309198, 5155511, -8475129, 12254358, -16464031,
    21058582, -25975468, 31134925, -36439980, 41776576, -47013531,
    52001880, -56572773, 60532438, -63651310, 65641216, -66106653,
    64434306, -59514759, 48914492, -25641661, -43211863, 2032024619,
    259078152, -171030074, 140147951, -122213025, 108972425, -97817115,
    87715388, -78221115, 69146069, -60428155, 52070177, -44107940,
    36592016, -29576574, 23112218, -17241334, 11995159, -7392110,
    3437105, -121675, -2575296, 4686318, -6253667, 7327486,
    -7963731, 8222062, -8163771, 7849823, -7339100, 6686863,
    -5943518, 5153669, -4355491, 3580402, -2853023, 2191401,
    -1607434, 1107488, -693131, 361951, -108411, -75308,
    198500, -271206, 303581, -305368, 285491, -251776,
    210770, -167673, 126359, -89466, 58534, -34189,
    55370, -81659, 110755, -140259, 166710, -185517,
    190961, -176279, 133844, -55445, -67329, 242595,
    -477590, 778004, -1147259, 1585755, -2090125, 2652540,
    -3260103, 3894371, -4531066, 5139993, -5685214, 6125491,
    -6415032, 6504519, -6342426, 5876592, -5056024, 3832856,
    -2164423, 15364, 2640322, -5817357, 9517468, -13727969,
    18420701, -23551374, 29059353, -34867877, 40884680, -47002911,
    53102194, -59049485, 64699198, -69891511, 74446659, -78150255,
    80716920, -81694468, 80171384, -73608114, 49804281, 2045888672,
    150858204, -122377747, 110795367, -102745848, 95673544, -88800921,
    81862299, -74787673, 67595562, -60348176, 53129226, -46031270,
    39147648, -32566915, 26368872, -20621729, 15380182, -10684276,
    6558959, -3014254, 45970, 2363128, -4241777, 5628394,
    -6569065, 7115441, -7322629, 7247160, -6945102, 6470384,
    -5873370, 5199718, -4489541, 3776867, -3089395, 2448515,
    -1869564, 1362287, -931448, 577542, -297585, 85914,
    65028, -163958, 220098, -242608, 240141, -220499,
    190401, -155365, 119666, -86388, 57521, -34117,
];

pub static SRC_INT32_21_32_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_32_4535_5000",
    input_stride: 3,
    output_stride: 2,
    subfilter_count: 21,
    subfilter_length: 168,
    block_in: 32,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_32_4535_5000_FIR),
};

static SRC_INT32_21_32_4535_5000_FIR: [i32; 3528] = [
    21709, -7623, -33552, 47177, 9585, -84375,
    65165, 65194, -155355, 49081, 173546, -224280,
    -35677, 333624, -247924, -220965, 517267, -166014,
    -519202, 661518, 85007, -904321, 670437, 548619,
    -1296465, 430579, 1219088, -1557930, -158740, 2014106,
    -1507059, -1143855, 2759193, -953548, -2472418, 3193918,
    246910, -3958868, 3006912, 2127296, -5273668, 1900475,
    4547831, -5967954, -322432, 7156327, -5538951, -3664088,
    9387271, -3532264, -7851702, 10510776, 332944, -12292764,
    9732375, 6038161, -16082833, 6332183, 13164600, -18071096,
    -180045, 20838391, -16971805, -9925686, 27728706, -11486799,
    -22567873, 32076674, -370176, -37301667, 31672527, 17708132,
    -52946179, 23531912, 44894469, -68166500, 2349901, 87098813,
    -81963103, -47444910, 170385873, -95842240, -233579729, 657888779,
    1343263371, 603229168, -250259402, -74812801, 168190617, -58536951,
    -73821652, 89741996, -5372519, -65046775, 48840805, 18334965,
    -52568309, 21730818, 28540631, -38481196, 3117752, 30608637,
    -24513594, -8835257, 27515350, -12071345, -15248249, 21469809,
    -2137036, -17215560, 14260054, 4795260, -15935152, 7277355,
    8710685, -12641702, 1478158, 9991507, -8478794, -2627738,
    9283843, -4377845, -4936277, 7343940, -979894, -5659242,
    4895226, 1385504, -5204774, 2520676, 2667252, -4053383,
    603987, 3020586, -2652430, -679304, 2716970, -1344618,
    -1330055, 2057102, -336215, -1469041, 1303307, 298694,
    -1273397, 639922, 588402, -921084, 162273, 621688,
    -552976, -111642, 506545, -255727, -216207, 338673,
    -62894, -209899, 183991, 31801, -151504, 74790,
    56363, -85203, 15829, 43836, -35277, -4703,
    22310, -10563, -31474, 50172, 3115, -82772,
    73553, 54842, -157885, 66205, 161394, -236880,
    -7756, 325545, -277861, -183802, 523539, -219565,
    -480443, 695945, 6147, -879387, 747399, 451549,
    -1308314, 559931, 1123320, -1633891, 21731, 1952971,
    -1672302, -931312, 2777448, -1221620, -2269186, 3340475,
    -115095, -3828771, 3322630, 1712295, -5296633, 2402391,
    4157963, -6226289, 342379, 6904470, -6096933, -2913353,
    9408797, -4411621, -7151482, 10940938, -822531, -11833486,
    10674971, 4737996, -16090019, 7823197, 11946389, -18773209,
    1791178, 20019604, -18557493, -7678355, 27699654, -14055791,
    -20409750, 33273337, -3881354, -35784617, 34551539, 13494676,
    -52861375, 28572655, 40510784, -70721478, 10150561, 83648629,
    -89515978, -35713041, 171123663, -116708275, -213975230, 712099013,
    1339339509, 548382084, -264026500, -53796187, 164591161, -68907221,
    -65171029, 91566866, -12950944, -61395772, 52320127, 13028486,
    -51735260, 25529356, 25185196, -39315564, 6552195, 28884011,
    -26231444, -6124875, 27063088, -14097275, -13402782, 21909557,
    -4062794, -16215053, 15223957, 3226147, -15649153, 8445134,
    7619328, -12877951, 2603165, 9388240, -9027748, -1706114,
    9099953, -5048628, -4294479, 7466103, -1624308, -5303198,
    5197405, 862075, -5090884, 2889154, 2306796, -4111758,
    953050, 2822202, -2807831, -401336, 2651345, -1531944,
    -1142939, 2081741, -509169, -1368119, 1375347, 165455,
    -1239420, 724716, 502064, -929615, 237283, 576864,
    -581527, -56936, 491522, -287814, -183012, 340689,
    -89177, -193890, 192664, 14519, -146388, 83557,
    47232, -85264, 21797, 40187, -36642, -1830,
    22724, -13496, -29053, 52785, -3527, -80391,
    81443, 43813, -159050, 83017, 147618, -247561,
    20630, 314467, -305728, -144537, 525252, -271811,
    -436985, 724603, -73629, -846418, 818553, 349513,
    -1308729, 685583, 1016741, -1696135, 203630, 1874076,
    -1824223, -708766, 2771375, -1481105, -2044340, 3458753,
    -478875, -3663970, 3611443, 1279172, -5273136, 2886739,
    3728755, -6431620, 1008737, 6590151, -6605013, -2132003,
    9347693, -5257907, -6383821, 11277635, -1978169, -11267206,
    11529679, 3387909, -15955753, 9254900, 10615347, -19314741,
    3759396, 19019422, -19990467, -5348422, 27426793, -16519082,
    -18056672, 34186116, -7385116, -33940702, 37150294, 9125786,
    -52310384, 33411430, 35723550, -72682770, 17962188, 79409893,
    -96404623, -23430306, 170361518, -137230530, -191451346, 765597281,
    1331512440, 493607194, -274910598, -32963331, 159650918, -78481334,
    -56093663, 92569252, -20321675, -57251159, 55307107, 7659644,
    -50458406, 29072603, 21637273, -39800198, 9903611, 26919703,
    -27708049, -3379713, 26377487, -15986585, -11452317, 22155036,
    -5940697, -15079238, 16048724, 1638759, -15228206, 9531744,
    6468284, -13000159, 3698261, 8706785, -9494266, -775559,
    8837734, -5670857, -3619430, 7522189, -2250128, -4903264,
    5452044, 334825, -4933318, 3229688, 1928852, -4133754,
    1291109, 2600696, -2937456, -122106, 2563085, -1704307,
    -947434, 2087966, -676129, -1256158, 1434691, 32042,
    -1194939, 802324, 412222, -929928, 309405, 527494,
    -604663, -2378, 472382, -316976, -148648, 339694,
    -114308, -176418, 199515, -2612, -140074, 91433,
    37859, -84572, 27440, 36271, -37645, 973,
    22939, -16394, -26301, 54983, -10285, -77240,
    88755, 32193, -158815, 99362, 132315, -256200,
    49236, 300446, -331250, -103492, 522333, -322272,
    -389159, 747174, -153622, -805619, 883211, 243363,
    -1297592, 806389, 900191, -1743986, 385365, 1777962,
    -1961368, -478095, 2740828, -1729645, -1799690, 3547489,
    -841237, -3465653, 3870608, 831608, -5203047, 3349128,
    3263711, -6581773, 1670785, 6215715, -7058385, -1326710,
    9203953, -6063461, -5555037, 11517304, -3123805, -10598223,
    12288423, 1999455, -15680320, 10614325, 9182459, -19689901,
    5707285, 17845452, -21257120, -2955810, 26910856, -18854288,
    -15527918, 34804902, -10850624, -31783529, 39443652, 4638465,
    -51293736, 38003791, 30570443, -74026275, 25716556, 74408137,
    -102557834, -10692075, 168068339, -157225665, -166031462, 818121881,
    1319823341, 439160392, -282958121, -12478787, 153442740, -87192933,
    -46674281, 92752053, -27423585, -52654432, 57780937, 2275695,
    -48752866, 32331896, 17929332, -39933599, 13143403, 24734591,
    -28932230, -623969, 25466108, -17723688, -9414574, 22205359,
    -7754649, -13818899, 16728028, 47079, -14676843, 10528200,
    5267989, -13007981, 4754064, 7953600, -9874803, 155733,
    8499993, -6239412, -2917253, 7512151, -2852010, -4463239,
    5657248, -191609, -4733769, 3539505, 1536854, -4119454,
    1615289, 2358187, -3040376, 155933, 2453149, -1860324,
    -745323, 2075885, -835685, -1134238, 1480939, -100377,
    -1140446, 872139, 319700, -922105, 378039, 474061,
    -622244, 51554, 449342, -342996, -113433, 335739,
    -138084, -157656, 204511, -19444, -132639, 98364,
    28333, -83150, 32717, 32128, -38285, 3680,
    22947, -19229, -23235, 56736, -17099, -73330,
    95411, 20076, -157159, 115085, 115599, -262688,
    77810, 283569, -354170, -61010, 514752, -370479,
    -337338, 763389, -233128, -757269, 940733, 133997,
    -1274891, 921236, 774607, -1776890, 565329, 1665327,
    -2082400, -241266, 2685872, -1964960, -1537236, 3605669,
    -1198977, -3235316, 4097620, 373442, -5086647, 3785329,
    2766674, -6675044, 2322667, 5784050, -7452692, -504404,
    8978299, -6820928, -4672026, 11657212, -4249299, -9831765,
    12943920, 584601, -15265244, 11889059, 7659671, -19894324,
    7617591, 16506879, -22345219, -521128, 26154715, -21039993,
    -12844449, 35122088, -14247145, -29329560, 41408938, 71076,
    -49816044, 42307006, 25092733, -74732993, 33345059, 68675854,
    -107909525, 2400540, 164224903, -176508612, -137757043, 869413569,
    1304333658, 385292310, -288231759, 7500290, 146048142, -94984088,
    -36999162, 92125123, -34198614, -47650514, 59725455, -3076428,
    -46637341, 35281282, 14094973, -39717339, 16244160, 22349337,
    -29895090, 2118235, 24338431, -19294427, -7307919, 22061351,
    -9489216, -12445840, 17256857, -1534956, -14000702, 11426363,
    4029245, -12902075, 5761595, 7135727, -10166586, 1079616,
    8090175, -6749677, -2194269, 7436526, -3424853, -3987247,
    5811568, -712628, -4494282, 3816118, 1134336, -4069255,
    1922863, 2096959, -3115902, 430359, 2322676, -1998768,
    -538431, 2045764, -986510, -1003516, 1513807, -230652,
    -1076516, 933627, 225336, -906302, 442621, 417079,
    -634180, 104396, 422653, -365686, -77686, 328898,
    -160314, -137791, 207638, -35833, -124165, 104307,
    18740, -81025, 37587, 27801, -38568, 6271,
    22740, -21973, -19876, 58017, -23909, -68682,
    101339, 7563, -154072, 130037, 97597, -266936,
    106096, 263946, -374250, -17450, 502520, -415979,
    -281937, 773034, -311437, -701715, 990538, 22348,
    -1240711, 1029050, 641012, -1794419, 741918, 1537019,
    -2186112, -318, 2606792, -2184867, -1259150, 3632542,
    -1548906, -2974746, 4290240, -91369, -4924627, 4191315,
    2241796, -6710215, 2958572, 5298568, -7784066, 327793,
    8672179, -7523330, -3742207, 11695487, -5344619, -8973954,
    13489748, -844377, -14713289, 13067354, 6059800, -19925114,
    9473276, 15014393, -23244019, 1934508, 25163371, -23055944,
    -10028734, 35132659, -17544313, -26597990, 43026167, -4536982,
    -47885995, 46280448, 19334964, -74789245, 40779298, 62252325,
    -112399375, 15741411, 158824277, -194893834, -106687654, 919217130,
    1285124716, 332246858, -290809785, 26825098, 137556480, -101805620,
    -27155391, 90705092, -40592217, -42287336, 61129238, -8350517,
    -44133921, 37897722, 10168621, -39156017, 19179887, 19786195,
    -30590070, 4823060, 23005761, -20686192, -5151198, 21725525,
    -11129755, -10972772, 17631544, -3093585, -13206481, 12219005,
    2763121, -12684086, 6712356, 6260730, -10367635, 1988061,
    7612335, -7197575, -1456938, 7296415, -3963847, -3479701,
    5914012, -1223715, -4217242, 4057353, 724895, -3983868,
    2211267, 1819444, -3163593, 698799, 2172978, -2118575,
    -328609, 1998023, -1127360, -865218, 1533134, -357662,
    -1003800, 986334, 129973, -882740, 502630, 357086,
    -640431, 155697, 392593, -384887, -41729, 319270,
    -180825, -117011, 208897, -51643, -114747, 109226,
    9167, -78229, 42017, 23334, -38499, 8725,
    22313, -24597, -16247, 58804, -30653, -63323,
    106473, -5242, -149559, 144070, 78450, -268874,
    133839, 241715, -391274, 26815, 485688, -458336,
    -223405, 775951, -387843, -639374, 1032105, -90619,
    -1195243, 1128814, 500513, -1796278, 913543, 1394035,
    -2271441, 242660, 2504086, -2387302, -967760, 3627626,
    -1887880, -2686010, 4446514, -558778, -4718085, 4563294,
    1693505, -6686577, 3572794, 4763179, -8049171, 1162620,
    8287758, -8164128, -2773456, 11631139, -6399939, -8031752,
    13920410, -2275002, -14028439, 14138236, 4396419, -19780886,
    11257674, 13380108, -23944365, 4389658, 23943924, -24883238,
    -7104564, 34834253, -20712404, -23610598, 44278236, -9145610,
    -45516313, 49885969, 13344599, -74186856, 47951669, 55183375,
    -115973428, 29220179, 151872153, -212196619, -72900854, 967282926,
    1262297213, 280259833, -290785275, 45356069, 128064086, -107617353,
    -17230125, 88515135, -46553795, -36615391, 61985654, -13501479,
    -41267861, 40161261, 6185223, -38257202, 21926220, 17068812,
    -31012993, 7467157, 21481113, -21888020, -2963573, 21202055,
    -12662539, -9413202, 17849792, -4615336, -12301864, 12899863,
    1480856, -12356631, 7598397, 5336624, -10476778, 2873228,
    7071098, -7579604, -711802, 7093481, -4464510, -2945257,
    5964048, -1720471, -3905341, 4261358, 312165, -3864306,
    2478127, 1528197, -3183252, 958955, 2005523, -2218853,
    -117718, 1933235, -1257093, -720623, 1538877, -480328,
    -923022, 1029886, 34459, -851709, 557590, 294642,
    -641008, 205025, 359467, -400475, -5880, 306979,
    -199461, -95514, 208305, -66743, -104482, 113097,
    -303, -74803, 45977, 18769, -38090, 11023,
    21663, -27072, -12375, 59077, -37268, -57287,
    110750, -18228, -143635, 157045, 58312, -268451,
    160784, 217037, -405051, 71401, 464349, -497137,
    -162224, 772038, -461648, -570724, 1064981, -203917,
    -1138778, 1219566, 354286, -1782308, 1078643, 1237507,
    -2337475, 485541, 2378464, -2570339, -665529, 3590717,
    -2212827, -2371441, 4564796, -1024687, -4468521, 4897749,
    1126463, -6603928, 4159777, 4182258, -8245230, 1992750,
    7827905, -8737283, -1774046, 11464075, -7405719, -7012910,
    14231387, -3694703, -13215873, 15091606, 2683747, -19461784,
    12954637, 11617462, -24438785, 6822739, 22505527, -26504495,
    -4096851, 34227202, -23722598, -20391581, 45151099, -13714354,
    -42723689, 53088256, 7171642, -72923287, 54795960, 47521078,
    -118584652, 42723078, 143387090, -228234374, -36491976, 1013368417,
    1235970587, 229557582, -288265245, 62963658, 117673357, -112388280,
    -7309856, 85584686, -52037075, -30687275, 62292870, -18485717,
    -38067338, 42055179, 2179941, -37031338, 24460624, 14222005,
    -31162083, 10027867, 19779090, -22890674, -764350, 20496725,
    -14074868, -7781304, 17910685, -6087145, -11295453, 13463694,
    193760, -11923266, 8412387, 4371801, -10493654, 3727528,
    6471609, -7892859, 34571, 6829923, -4922728, -2388773,
    5961606, -2198654, -3561558, 4426621, -100220, -3711872,
    2721272, 1225872, -3174930, 1208617, 1821923, -2298891,
    92388, 1852117, -1374672, -571054, 1531112, -597617,
    -834968, 1063995, -60370, -813559, 607074, 230322,
    -635970, 251971, 323603, -412361, 29548, 292168,
    -216084, -73498, 205896, -81011, -93476, 115904,
    -9587, -70788, 49441, 14151, -37352, 13150,
    20788, -29372, -8288, 58822, -43691, -50614,
    114116, -31282, -136331, 168829, 37347, -265636,
    186680, 190101, -415416, 115916, 438638, -531996,
    -98908, 761254, -532171, -496309, 1088788, -316548,
    -1071708, 1300421, 203569, -1752488, 1235704, 1068700,
    -2383467, 726180, 2230848, -2732207, -355037, 3521890,
    -2520776, -2033616, 4643762, -1484981, -4177820, 5191469,
    545534, -6462589, 4714167, 3560612, -8370056, 2810844,
    7296171, -9237311, -752572, 11195105, -8352795, -5925900,
    14419182, -5090926, -12281925, 15918332, 936528, -18969488,
    14548679, 9741107, -24721570, 9212220, 20859318, -27904022,
    -1031421, 33314547, -26547239, -16967358, 45633915, -18202752,
    -39528668, 55855167, 868227, -71001724, 61247937, 39323403,
    -120193452, 56133809, 133400668, -242827937, 2426215, 1057239651,
    1206282272, 180355736, -283369697, 79529059, 106491823, -116096667,
    2520294, 81949107, -57000452, -24557210, 62053818, -23261490,
    -34563177, 43566108, -1812155, -35491637, 26762579, 11271540,
    -31037963, 12483414, 17915743, -23686719, 1427191, 19616871,
    -15355177, -6091795, 17814685, -7496468, -10196684, 13906309,
    -1086890, -11388451, 9147668, 3374956, -10418711, 4543694,
    5819493, -8135056, 775647, 6508454, -5334782, -1815270,
    5907075, -2654213, -3189130, 4551982, -508657, -3528149,
    2938760, 915200, -3138922, 1445686, 1623917, -2358157,
    299877, 1755522, -1479179, -417866, 1510034, -708554,
    -740480, 1088456, -153689, -768699, 650708, 164710,
    -625428, 296154, 285350, -420486, 64250, 275001,
    -230578, -51166, 201720, -94337, -81840, 117641,
    -18606, -66233, 52391, 9522, -36302, 15091,
    19689, -31470, -4019, 58029, -49860, -43353,
    116523, -44288, -127687, 179298, 15731, -260418,
    211281, 161114, -422234, 159963, 408729, -562557,
    -33992, 743619, -598752, -416725, 1103220, -427511,
    -994523, 1370570, 49652, -1706936, 1383266, 888995,
    -2408840, 962437, 2062356, -2871307, -38954, 3421503,
    -2808882, -1675336, 4682424, -1935562, -3848250, 5441577,
    -44266, -6263399, 5230861, 2903437, -8422073, 3609624,
    6696764, -9659337, 282123, 10825939, -9232462, -4779849,
    14481362, -6451243, -11234037, 16610339, -830098, -18307214,
    16025121, 7766793, -24788828, 11536804, 19018335, -29067963,
    2065209, 32102036, -29160086, -13366360, 45719172, -22570688,
    -35955506, 58158042, -5511806, -68431118, 67245919, 30653805,
    -120768124, 69334441, 121957543, -255802881, 43723983, 1098672697,
    1173386839, 132858029, -276230602, 94944827, 94631188, -118730065,
    12177275, 77649311, -61407289, -18280564, 61276121, -27789256,
    -30788567, 44684118, -5756393, -33653938, 28813742, 8243901,
    -30643635, 14813088, 15908425, -24270571, 3591962, 18571302,
    -16493127, -4359800, 17563627, -8831384, -9015741, 14224603,
    -2349940, -10757504, 9798316, 2355008, -10253195, 5314839,
    5120796, -8304549, 1504982, 6132277, -5697388, -1229880,
    5801298, -3083327, -2791522, 4636637, -909602, -3314981,
    3128885, 598965, -3075766, 1668192, 1413357, -2396310,
    502955, 1644430, -1569815, -262432, 1475953, -812230,
    -640449, 1103153, -244697, -717595, 688174, 98395,
    -609537, 337217, 245072, -424828, 97930, 255663,
    -242846, -28719, 195841, -106617, -69685, 118313,
    -27286, -61189, 54811, 4924, -34958, 16834,
    18369, -33340, 398, 56692, -55712, -35557,
    117932, -57128, -117760, 188336, -6354, -252811,
    234351, 130307, -425396, 203147, 374838, -588499,
    31967, 719211, -660760, -332622, 1108056, -535806,
    -907805, 1429289, -106134, -1645912, 1519943, 699885,
    -2413194, 1192189, 1874305, -2986230, 279977, 3290196,
    -3074455, -1299605, 4680144, -2372392, -3482431, 5645561,
    -637804, -6007712, 5705052, 2216278, -8400338, 4381932,
    6034515, -9999140, 1321021, 10359183, -10036550, -3584463,
    14416581, -7763463, -10080699, 17160684, -2600721, -17479689,
    17370221, 5711233, -24638536, 13775624, 16997418, -29984433,
    5166054, 30598088, -31536552, -9618793, 45402776, -26778748,
    -32031996, 59971985, -11913364, -65226173, 72731343, 21580764,
    -120285256, 82206354, 109115402, -266990805, 87255199, 1137455029,
    1137455029, 87255199, -266990805, 109115402, 82206354, -120285256,
    21580764, 72731343, -65226173, -11913364, 59971985, -32031996,
    -26778748, 45402776, -9618793, -31536552, 30598088, 5166054,
    -29984433, 16997418, 13775624, -24638536, 5711233, 17370221,
    -17479689, -2600721, 17160684, -10080699, -7763463, 14416581,
    -3584463, -10036550, 10359183, 1321021, -9999140, 6034515,
    4381932, -8400338, 2216278, 5705052, -6007712, -637804,
    5645561, -3482431, -2372392, 4680144, -1299605, -3074455,
    3290196, 279977, -2986230, 1874305, 1192189, -2413194,
    699885, 1519943, -1645912, -106134, 1429289, -907805,
    -535806, 1108056, -332622, -660760, 719211, 31967,
    -588499, 374838, 203147, -425396, 130307, 234351,
    -252811, -6354, 188336, -117760, -57128, 117932,
    -35557, -55712, 56692, 398, -33340, 18369,
    16834, -34958, 4924, 54811, -61189, -27286,
    118313, -69685, -106617, 195841, -28719, -242846,
    255663, 97930, -424828, 245072, 337217, -609537,
    98395, 688174, -717595, -244697, 1103153, -640449,
    -812230, 1475953, -262432, -1569815, 1644430, 502955,
    -2396310, 1413357, 1668192, -3075766, 598965, 3128885,
    -3314981, -909602, 4636637, -2791522, -3083327, 5801298,
    -1229880, -5697388, 6132277, 1504982, -8304549, 5120796,
    5314839, -10253195, 2355008, 9798316, -10757504, -2349940,
    14224603, -9015741, -8831384, 17563627, -4359800, -16493127,
    18571302, 3591962, -24270571, 15908425, 14813088, -30643635,
    8243901, 28813742, -33653938, -5756393, 44684118, -30788567,
    -27789256, 61276121, -18280564, -61407289, 77649311, 12177275,
    -118730065, 94631188, 94944827, -276230602, 132858029, 1173386839,
    1098672697, 43723983, -255802881, 121957543, 69334441, -120768124,
    30653805, 67245919, -68431118, -5511806, 58158042, -35955506,
    -22570688, 45719172, -13366360, -29160086, 32102036, 2065209,
    -29067963, 19018335, 11536804, -24788828, 7766793, 16025121,
    -18307214, -830098, 16610339, -11234037, -6451243, 14481362,
    -4779849, -9232462, 10825939, 282123, -9659337, 6696764,
    3609624, -8422073, 2903437, 5230861, -6263399, -44266,
    5441577, -3848250, -1935562, 4682424, -1675336, -2808882,
    3421503, -38954, -2871307, 2062356, 962437, -2408840,
    888995, 1383266, -1706936, 49652, 1370570, -994523,
    -427511, 1103220, -416725, -598752, 743619, -33992,
    -562557, 408729, 159963, -422234, 161114, 211281,
    -260418, 15731, 179298, -127687, -44288, 116523,
    -43353, -49860, 58029, -4019, -31470, 19689,
    15091, -36302, 9522, 52391, -66233, -18606,
    117641, -81840, -94337, 201720, -51166, -230578,
    275001, 64250, -420486, 285350, 296154, -625428,
    164710, 650708, -768699, -153689, 1088456, -740480,
    -708554, 1510034, -417866, -1479179, 1755522, 299877,
    -2358157, 1623917, 1445686, -3138922, 915200, 2938760,
    -3528149, -508657, 4551982, -3189130, -2654213, 5907075,
    -1815270, -5334782, 6508454, 775647, -8135056, 5819493,
    4543694, -10418711, 3374956, 9147668, -11388451, -1086890,
    13906309, -10196684, -7496468, 17814685, -6091795, -15355177,
    19616871, 1427191, -23686719, 17915743, 12483414, -31037963,
    11271540, 26762579, -35491637, -1812155, 43566108, -34563177,
    -23261490, 62053818, -24557210, -57000452, 81949107, 2520294,
    -116096667, 106491823, 79529059, -283369697, 180355736, 1206282272,
    1057239651, 2426215, -242827937, 133400668, 56133809, -120193452,
    39323403, 61247937, -71001724, 868227, 55855167, -39528668,
    -18202752, 45633915, -16967358, -26547239, 33314547, -1031421,
    -27904022, 20859318, 9212220, -24721570, 9741107, 14548679,
    -18969488, 936528, 15918332, -12281925, -5090926, 14419182,
    -5925900, -8352795, 11195105, -752572, -9237311, 7296171,
    2810844, -8370056, 3560612, 4714167, -6462589, 545534,
    5191469, -4177820, -1484981, 4643762, -2033616, -2520776,
    3521890, -355037, -2732207, 2230848, 726180, -2383467,
    1068700, 1235704, -1752488, 203569, 1300421, -1071708,
    -316548, 1088788, -496309, -532171, 761254, -98908,
    -531996, 438638, 115916, -415416, 190101, 186680,
    -265636, 37347, 168829, -136331, -31282, 114116,
    -50614, -43691, 58822, -8288, -29372, 20788,
    13150, -37352, 14151, 49441, -70788, -9587,
    115904, -93476, -81011, 205896, -73498, -216084,
    292168, 29548, -412361, 323603, 251971, -635970,
    230322, 607074, -813559, -60370, 1063995, -834968,
    -597617, 1531112, -571054, -1374672, 1852117, 92388,
    -2298891, 1821923, 1208617, -3174930, 1225872, 2721272,
    -3711872, -100220, 4426621, -3561558, -2198654, 5961606,
    -2388773, -4922728, 6829923, 34571, -7892859, 6471609,
    3727528, -10493654, 4371801, 8412387, -11923266, 193760,
    13463694, -11295453, -6087145, 17910685, -7781304, -14074868,
    20496725, -764350, -22890674, 19779090, 10027867, -31162083,
    14222005, 24460624, -37031338, 2179941, 42055179, -38067338,
    -18485717, 62292870, -30687275, -52037075, 85584686, -7309856,
    -112388280, 117673357, 62963658, -288265245, 229557582, 1235970587,
    1013368417, -36491976, -228234374, 143387090, 42723078, -118584652,
    47521078, 54795960, -72923287, 7171642, 53088256, -42723689,
    -13714354, 45151099, -20391581, -23722598, 34227202, -4096851,
    -26504495, 22505527, 6822739, -24438785, 11617462, 12954637,
    -19461784, 2683747, 15091606, -13215873, -3694703, 14231387,
    -7012910, -7405719, 11464075, -1774046, -8737283, 7827905,
    1992750, -8245230, 4182258, 4159777, -6603928, 1126463,
    4897749, -4468521, -1024687, 4564796, -2371441, -2212827,
    3590717, -665529, -2570339, 2378464, 485541, -2337475,
    1237507, 1078643, -1782308, 354286, 1219566, -1138778,
    -203917, 1064981, -570724, -461648, 772038, -162224,
    -497137, 464349, 71401, -405051, 217037, 160784,
    -268451, 58312, 157045, -143635, -18228, 110750,
    -57287, -37268, 59077, -12375, -27072, 21663,
    11023, -38090, 18769, 45977, -74803, -303,
    113097, -104482, -66743, 208305, -95514, -199461,
    306979, -5880, -400475, 359467, 205025, -641008,
    294642, 557590, -851709, 34459, 1029886, -923022,
    -480328, 1538877, -720623, -1257093, 1933235, -117718,
    -2218853, 2005523, 958955, -3183252, 1528197, 2478127,
    -3864306, 312165, 4261358, -3905341, -1720471, 5964048,
    -2945257, -4464510, 7093481, -711802, -7579604, 7071098,
    2873228, -10476778, 5336624, 7598397, -12356631, 1480856,
    12899863, -12301864, -4615336, 17849792, -9413202, -12662539,
    21202055, -2963573, -21888020, 21481113, 7467157, -31012993,
    17068812, 21926220, -38257202, 6185223, 40161261, -41267861,
    -13501479, 61985654, -36615391, -46553795, 88515135, -17230125,
    -107617353, 128064086, 45356069, -290785275, 280259833, 1262297213,
    967282926, -72900854, -212196619, 151872153, 29220179, -115973428,
    55183375, 47951669, -74186856, 13344599, 49885969, -45516313,
    -9145610, 44278236, -23610598, -20712404, 34834253, -7104564,
    -24883238, 23943924, 4389658, -23944365, 13380108, 11257674,
    -19780886, 4396419, 14138236, -14028439, -2275002, 13920410,
    -8031752, -6399939, 11631139, -2773456, -8164128, 8287758,
    1162620, -8049171, 4763179, 3572794, -6686577, 1693505,
    4563294, -4718085, -558778, 4446514, -2686010, -1887880,
    3627626, -967760, -2387302, 2504086, 242660, -2271441,
    1394035, 913543, -1796278, 500513, 1128814, -1195243,
    -90619, 1032105, -639374, -387843, 775951, -223405,
    -458336, 485688, 26815, -391274, 241715, 133839,
    -268874, 78450, 144070, -149559, -5242, 106473,
    -63323, -30653, 58804, -16247, -24597, 22313,
    8725, -38499, 23334, 42017, -78229, 9167,
    109226, -114747, -51643, 208897, -117011, -180825,
    319270, -41729, -384887, 392593, 155697, -640431,
    357086, 502630, -882740, 129973, 986334, -1003800,
    -357662, 1533134, -865218, -1127360, 1998023, -328609,
    -2118575, 2172978, 698799, -3163593, 1819444, 2211267,
    -3983868, 724895, 4057353, -4217242, -1223715, 5914012,
    -3479701, -3963847, 7296415, -1456938, -7197575, 7612335,
    1988061, -10367635, 6260730, 6712356, -12684086, 2763121,
    12219005, -13206481, -3093585, 17631544, -10972772, -11129755,
    21725525, -5151198, -20686192, 23005761, 4823060, -30590070,
    19786195, 19179887, -39156017, 10168621, 37897722, -44133921,
    -8350517, 61129238, -42287336, -40592217, 90705092, -27155391,
    -101805620, 137556480, 26825098, -290809785, 332246858, 1285124716,
    919217130, -106687654, -194893834, 158824277, 15741411, -112399375,
    62252325, 40779298, -74789245, 19334964, 46280448, -47885995,
    -4536982, 43026167, -26597990, -17544313, 35132659, -10028734,
    -23055944, 25163371, 1934508, -23244019, 15014393, 9473276,
    -19925114, 6059800, 13067354, -14713289, -844377, 13489748,
    -8973954, -5344619, 11695487, -3742207, -7523330, 8672179,
    327793, -7784066, 5298568, 2958572, -6710215, 2241796,
    4191315, -4924627, -91369, 4290240, -2974746, -1548906,
    3632542, -1259150, -2184867, 2606792, -318, -2186112,
    1537019, 741918, -1794419, 641012, 1029050, -1240711,
    22348, 990538, -701715, -311437, 773034, -281937,
    -415979, 502520, -17450, -374250, 263946, 106096,
    -266936, 97597, 130037, -154072, 7563, 101339,
    -68682, -23909, 58017, -19876, -21973, 22740,
    6271, -38568, 27801, 37587, -81025, 18740,
    104307, -124165, -35833, 207638, -137791, -160314,
    328898, -77686, -365686, 422653, 104396, -634180,
    417079, 442621, -906302, 225336, 933627, -1076516,
    -230652, 1513807, -1003516, -986510, 2045764, -538431,
    -1998768, 2322676, 430359, -3115902, 2096959, 1922863,
    -4069255, 1134336, 3816118, -4494282, -712628, 5811568,
    -3987247, -3424853, 7436526, -2194269, -6749677, 8090175,
    1079616, -10166586, 7135727, 5761595, -12902075, 4029245,
    11426363, -14000702, -1534956, 17256857, -12445840, -9489216,
    22061351, -7307919, -19294427, 24338431, 2118235, -29895090,
    22349337, 16244160, -39717339, 14094973, 35281282, -46637341,
    -3076428, 59725455, -47650514, -34198614, 92125123, -36999162,
    -94984088, 146048142, 7500290, -288231759, 385292310, 1304333658,
    869413569, -137757043, -176508612, 164224903, 2400540, -107909525,
    68675854, 33345059, -74732993, 25092733, 42307006, -49816044,
    71076, 41408938, -29329560, -14247145, 35122088, -12844449,
    -21039993, 26154715, -521128, -22345219, 16506879, 7617591,
    -19894324, 7659671, 11889059, -15265244, 584601, 12943920,
    -9831765, -4249299, 11657212, -4672026, -6820928, 8978299,
    -504404, -7452692, 5784050, 2322667, -6675044, 2766674,
    3785329, -5086647, 373442, 4097620, -3235316, -1198977,
    3605669, -1537236, -1964960, 2685872, -241266, -2082400,
    1665327, 565329, -1776890, 774607, 921236, -1274891,
    133997, 940733, -757269, -233128, 763389, -337338,
    -370479, 514752, -61010, -354170, 283569, 77810,
    -262688, 115599, 115085, -157159, 20076, 95411,
    -73330, -17099, 56736, -23235, -19229, 22947,
    3680, -38285, 32128, 32717, -83150, 28333,
    98364, -132639, -19444, 204511, -157656, -138084,
    335739, -113433, -342996, 449342, 51554, -622244,
    474061, 378039, -922105, 319700, 872139, -1140446,
    -100377, 1480939, -1134238, -835685, 2075885, -745323,
    -1860324, 2453149, 155933, -3040376, 2358187, 1615289,
    -4119454, 1536854, 3539505, -4733769, -191609, 5657248,
    -4463239, -2852010, 7512151, -2917253, -6239412, 8499993,
    155733, -9874803, 7953600, 4754064, -13007981, 5267989,
    10528200, -14676843, 47079, 16728028, -13818899, -7754649,
    22205359, -9414574, -17723688, 25466108, -623969, -28932230,
    24734591, 13143403, -39933599, 17929332, 32331896, -48752866,
    2275695, 57780937, -52654432, -27423585, 92752053, -46674281,
    -87192933, 153442740, -12478787, -282958121, 439160392, 1319823341,
    818121881, -166031462, -157225665, 168068339, -10692075, -102557834,
    74408137, 25716556, -74026275, 30570443, 38003791, -51293736,
    4638465, 39443652, -31783529, -10850624, 34804902, -15527918,
    -18854288, 26910856, -2955810, -21257120, 17845452, 5707285,
    -19689901, 9182459, 10614325, -15680320, 1999455, 12288423,
    -10598223, -3123805, 11517304, -5555037, -6063461, 9203953,
    -1326710, -7058385, 6215715, 1670785, -6581773, 3263711,
    3349128, -5203047, 831608, 3870608, -3465653, -841237,
    3547489, -1799690, -1729645, 2740828, -478095, -1961368,
    1777962, 385365, -1743986, 900191, 806389, -1297592,
    243363, 883211, -805619, -153622, 747174, -389159,
    -322272, 522333, -103492, -331250, 300446, 49236,
    -256200, 132315, 99362, -158815, 32193, 88755,
    -77240, -10285, 54983, -26301, -16394, 22939,
    973, -37645, 36271, 27440, -84572, 37859,
    91433, -140074, -2612, 199515, -176418, -114308,
    339694, -148648, -316976, 472382, -2378, -604663,
    527494, 309405, -929928, 412222, 802324, -1194939,
    32042, 1434691, -1256158, -676129, 2087966, -947434,
    -1704307, 2563085, -122106, -2937456, 2600696, 1291109,
    -4133754, 1928852, 3229688, -4933318, 334825, 5452044,
    -4903264, -2250128, 7522189, -3619430, -5670857, 8837734,
    -775559, -9494266, 8706785, 3698261, -13000159, 6468284,
    9531744, -15228206, 1638759, 16048724, -15079238, -5940697,
    22155036, -11452317, -15986585, 26377487, -3379713, -27708049,
    26919703, 9903611, -39800198, 21637273, 29072603, -50458406,
    7659644, 55307107, -57251159, -20321675, 92569252, -56093663,
    -78481334, 159650918, -32963331, -274910598, 493607194, 1331512440,
    765597281, -191451346, -137230530, 170361518, -23430306, -96404623,
    79409893, 17962188, -72682770, 35723550, 33411430, -52310384,
    9125786, 37150294, -33940702, -7385116, 34186116, -18056672,
    -16519082, 27426793, -5348422, -19990467, 19019422, 3759396,
    -19314741, 10615347, 9254900, -15955753, 3387909, 11529679,
    -11267206, -1978169, 11277635, -6383821, -5257907, 9347693,
    -2132003, -6605013, 6590151, 1008737, -6431620, 3728755,
    2886739, -5273136, 1279172, 3611443, -3663970, -478875,
    3458753, -2044340, -1481105, 2771375, -708766, -1824223,
    1874076, 203630, -1696135, 1016741, 685583, -1308729,
    349513, 818553, -846418, -73629, 724603, -436985,
    -271811, 525252, -144537, -305728, 314467, 20630,
    -247561, 147618, 83017, -159050, 43813, 81443,
    -80391, -3527, 52785, -29053, -13496, 22724,
    -1830, -36642, 40187, 21797, -85264, 47232,
    83557, -146388, 14519, 192664, -193890, -89177,
    340689, -183012, -287814, 491522, -56936, -581527,
    576864, 237283, -929615, 502064, 724716, -1239420,
    165455, 1375347, -1368119, -509169, 2081741, -1142939,
    -1531944, 2651345, -401336, -2807831, 2822202, 953050,
    -4111758, 2306796, 2889154, -5090884, 862075, 5197405,
    -5303198, -1624308, 7466103, -4294479, -5048628, 9099953,
    -1706114, -9027748, 9388240, 2603165, -12877951, 7619328,
    8445134, -15649153, 3226147, 15223957, -16215053, -4062794,
    21909557, -13402782, -14097275, 27063088, -6124875, -26231444,
    28884011, 6552195, -39315564, 25185196, 25529356, -51735260,
    13028486, 52320127, -61395772, -12950944, 91566866, -65171029,
    -68907221, 164591161, -53796187, -264026500, 548382084, 1339339509,
    712099013, -213975230, -116708275, 171123663, -35713041, -89515978,
    83648629, 10150561, -70721478, 40510784, 28572655, -52861375,
    13494676, 34551539, -35784617, -3881354, 33273337, -20409750,
    -14055791, 27699654, -7678355, -18557493, 20019604, 1791178,
    -18773209, 11946389, 7823197, -16090019, 4737996, 10674971,
    -11833486, -822531, 10940938, -7151482, -4411621, 9408797,
    -2913353, -6096933, 6904470, 342379, -6226289, 4157963,
    2402391, -5296633, 1712295, 3322630, -3828771, -115095,
    3340475, -2269186, -1221620, 2777448, -931312, -1672302,
    1952971, 21731, -1633891, 1123320, 559931, -1308314,
    451549, 747399, -879387, 6147, 695945, -480443,
    -219565, 523539, -183802, -277861, 325545, -7756,
    -236880, 161394, 66205, -157885, 54842, 73553,
    -82772, 3115, 50172, -31474, -10563, 22310,
    -4703, -35277, 43836, 15829, -85203, 56363,
    74790, -151504, 31801, 183991, -209899, -62894,
    338673, -216207, -255727, 506545, -111642, -552976,
    621688, 162273, -921084, 588402, 639922, -1273397,
    298694, 1303307, -1469041, -336215, 2057102, -1330055,
    -1344618, 2716970, -679304, -2652430, 3020586, 603987,
    -4053383, 2667252, 2520676, -5204774, 1385504, 4895226,
    -5659242, -979894, 7343940, -4936277, -4377845, 9283843,
    -2627738, -8478794, 9991507, 1478158, -12641702, 8710685,
    7277355, -15935152, 4795260, 14260054, -17215560, -2137036,
    21469809, -15248249, -12071345, 27515350, -8835257, -24513594,
    30608637, 3117752, -38481196, 28540631, 21730818, -52568309,
    18334965, 48840805, -65046775, -5372519, 89741996, -73821652,
    -58536951, 168190617, -74812801, -250259402, 603229168, 1343263371,
    657888779, -233579729, -95842240, 170385873, -47444910, -81963103,
    87098813, 2349901, -68166500, 44894469, 23531912, -52946179,
    17708132, 31672527, -37301667, -370176, 32076674, -22567873,
    -11486799, 27728706, -9925686, -16971805, 20838391, -180045,
    -18071096, 13164600, 6332183, -16082833, 6038161, 9732375,
    -12292764, 332944, 10510776, -7851702, -3532264, 9387271,
    -3664088, -5538951, 7156327, -322432, -5967954, 4547831,
    1900475, -5273668, 2127296, 3006912, -3958868, 246910,
    3193918, -2472418, -953548, 2759193, -1143855, -1507059,
    2014106, -158740, -1557930, 1219088, 430579, -1296465,
    548619, 670437, -904321, 85007, 661518, -519202,
    -166014, 517267, -220965, -247924, 333624, -35677,
    -224280, 173546, 49081, -155355, 65194, 65165,
    -84375, 9585, 47177, -33552, -7623, 21709,
];

pub static SRC_INT32_21_40_2381_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_40_2381_5000",
    input_stride: 19,
    output_stride: 10,
    subfilter_count: 21,
    subfilter_length: 40,
    block_in: 40,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_40_2381_5000_FIR),
};

static SRC_INT32_21_40_2381_5000_FIR: [i32; 840] = [
    -68970, -279752, 76684, 1348163, 1378074, -2318676,
    -6006650, -824703, 12115449, 13458057, -10599059, -34920878,
    -13143621, 49674134, 68518276, -24369393, -147286753, -98032508,
    223980237, 644001428, 832034440, 626777027, 203989800, -106741099,
    -143700189, -17914911, 70050935, 46826985, -15507304, -34513183,
    -9077317, 13978447, 11566328, -1334626, -5970136, -2079065,
    1455625, 1288343, 34126, -274478, -78138, -283729,
    121920, 1405413, 1290695, -2559738, -6021056, -292695,
    12637713, 12871185, -12127366, -35213220, -10667738, 52419836,
    66699230, -30921018, -150462632, -88644384, 244228756, 660663229,
    831068094, 609026158, 184292082, -114768548, -139727067, -11576644,
    71299457, 43890975, -17753382, -33994744, -7567474, 14432452,
    10993273, -1821291, -5912496, -1841813, 1523478, 1226360,
    -5707, -268033, -87799, -286283, 169764, 1459680,
    1193396, -2801298, -6012423, 260093, 13130208, 12217982,
    -13656727, -35385902, -8085611, 55051536, 64592481, -37549871,
    -153204261, -78580071, 264699695, 676727330, 829137518, 590785891,
    164920613, -122114955, -135391996, -5372788, 72267001, 40878685,
    -19877011, -33370447, -6074668, 14820419, 10399210, -2283655,
    -5834765, -1607784, 1581798, 1162611, -42779, -260541,
    -97916, -287288, 220132, 1510542, 1086130, -3042362,
    -5979884, 832229, 13590042, 11498864, -15181469, -35434947,
    -5403742, 57556762, 62197678, -44235240, -155488711, -67844658,
    285356445, 692159756, 826246933, 572094131, 145907742, -128782108,
    -130719986, 679378, 72957598, 37802637, -21873905, -32645430,
    -4603833, 15142932, 9787048, -2720805, -5738018, -1377791,
    1630786, 1097478, -77073, -252125, -108445, -286622,
    272920, 1557575, 968890, -3281897, -5922636, 1422149,
    14014362, 10714512, -16695774, -35356725, -2629166, 59923166,
    59515458, -50955664, -157293768, -56444995, 306161541, 706927747,
    822402660, 552989525, 127284567, -134773455, -125736370, 6563526,
    73376119, 34675263, -23740343, -31825062, -3159683, 15400803,
    9159675, -3131961, -5623369, -1152598, 1670675, 1031337,
    -108588, -242906, -119338, -284161, 328006, 1600350,
    841714, -3518833, -5839950, 2028168, 14400360, 9865878,
    -18193698, -35147981, 230556, 62138574, 56547467, -57688977,
    -158598010, -44389695, 327076744, 720999842, 817613100, 533511359,
    109080864, -140094063, -120466730, 12264301, 73528238, 31508855,
    -25473166, -30914911, -1746698, 15595062, 8519947, -3516470,
    -5491962, -932920, 1701727, 964543, -137337, -233003,
    -130538, -279787, 385248, 1638437, 704688, -3752069,
    -5731177, 2648475, 14745291, 8954192, -19669191, -34805853,
    3167358, 64191031, 53296383, -64412367, -159380884, -31689135,
    348063139, 734345970, 811888708, 513699455, 91325029, -144750589,
    -114936812, 17767353, 73420396, 28315530, -27069772, -29920721,
    -369119, 15726949, 7870673, -3873806, -5344967, -719416,
    1724233, 897443, -163345, -222529, -141984, -273385,
    444485, 1671408, 557945, -3980475, -5595749, 3281139,
    15046481, 7980960, -21116113, -34327898, 6172677, 66068853,
    49765930, -71102426, -159622774, -18355454, 369081224, 746937523,
    805241972, 493594067, 74044018, -148751231, -109172454, 23059356,
    73059754, 25107191, -28528116, -28848388, 969066, 15797902,
    7214611, -4203568, -5183573, -512695, 1738507, 830363,
    -186652, -211597, -153608, -264845, 505537, 1698838,
    401669, -4202896, -5433188, 3924116, 15301344, 6947972,
    -22528260, -33712107, 9237481, 67760668, 45960889, -77735211,
    -159305078, -4402542, 390091008, 758747437, 797687372, 473235779,
    57263289, -152105685, -103199508, 28128025, 72454160, 21895492,
    -29846698, -27703934, 2264127, 15809543, 6554455, -4505480,
    -5008983, -313311, 1744886, 763614, -207310, -200312,
    -165336, -254061, 568204, 1720307, 236092, -4418156,
    -5243112, 4575248, 15507393, 5857300, -23899383, -32956926,
    12352282, 69255469, 41887112, -84286305, -158410277, 10153976,
    411052112, 769750264, 789241345, 452665401, 41006759, -154825096,
    -97043765, 32962135, 71612101, 18691799, -31024561, -26493477,
    3512602, 15763673, 5892827, -4779384, -4822407, -121763,
    1743726, 697491, -225380, -188777, -177087, -240937,
    632268, 1735404, 61502, -4625061, -5025237, 5232273,
    15662252, 4711298, -25223212, -32061274, 15507162, 70542660,
    37551525, -90730881, -156922001, 25296755, 431923863, 779922239,
    779922239, 431923863, 25296755, -156922001, -90730881, 37551525,
    70542660, 15507162, -32061274, -25223212, 4711298, 15662252,
    5232273, -5025237, -4625061, 61502, 1735404, 632268,
    -240937, -177087, -188777, -225380, 697491, 1743726,
    -121763, -4822407, -4779384, 5892827, 15763673, 3512602,
    -26493477, -31024561, 18691799, 71612101, 32962135, -97043765,
    -154825096, 41006759, 452665401, 789241345, 769750264, 411052112,
    10153976, -158410277, -84286305, 41887112, 69255469, 12352282,
    -32956926, -23899383, 5857300, 15507393, 4575248, -5243112,
    -4418156, 236092, 1720307, 568204, -254061, -165336,
    -200312, -207310, 763614, 1744886, -313311, -5008983,
    -4505480, 6554455, 15809543, 2264127, -27703934, -29846698,
    21895492, 72454160, 28128025, -103199508, -152105685, 57263289,
    473235779, 797687372, 758747437, 390091008, -4402542, -159305078,
    -77735211, 45960889, 67760668, 9237481, -33712107, -22528260,
    6947972, 15301344, 3924116, -5433188, -4202896, 401669,
    1698838, 505537, -264845, -153608, -211597, -186652,
    830363, 1738507, -512695, -5183573, -4203568, 7214611,
    15797902, 969066, -28848388, -28528116, 25107191, 73059754,
    23059356, -109172454, -148751231, 74044018, 493594067, 805241972,
    746937523, 369081224, -18355454, -159622774, -71102426, 49765930,
    66068853, 6172677, -34327898, -21116113, 7980960, 15046481,
    3281139, -5595749, -3980475, 557945, 1671408, 444485,
    -273385, -141984, -222529, -163345, 897443, 1724233,
    -719416, -5344967, -3873806, 7870673, 15726949, -369119,
    -29920721, -27069772, 28315530, 73420396, 17767353, -114936812,
    -144750589, 91325029, 513699455, 811888708, 734345970, 348063139,
    -31689135, -159380884, -64412367, 53296383, 64191031, 3167358,
    -34805853, -19669191, 8954192, 14745291, 2648475, -5731177,
    -3752069, 704688, 1638437, 385248, -279787, -130538,
    -233003, -137337, 964543, 1701727, -932920, -5491962,
    -3516470, 8519947, 15595062, -1746698, -30914911, -25473166,
    31508855, 73528238, 12264301, -120466730, -140094063, 109080864,
    533511359, 817613100, 720999842, 327076744, -44389695, -158598010,
    -57688977, 56547467, 62138574, 230556, -35147981, -18193698,
    9865878, 14400360, 2028168, -5839950, -3518833, 841714,
    1600350, 328006, -284161, -119338, -242906, -108588,
    1031337, 1670675, -1152598, -5623369, -3131961, 9159675,
    15400803, -3159683, -31825062, -23740343, 34675263, 73376119,
    6563526, -125736370, -134773455, 127284567, 552989525, 822402660,
    706927747, 306161541, -56444995, -157293768, -50955664, 59515458,
    59923166, -2629166, -35356725, -16695774, 10714512, 14014362,
    1422149, -5922636, -3281897, 968890, 1557575, 272920,
    -286622, -108445, -252125, -77073, 1097478, 1630786,
    -1377791, -5738018, -2720805, 9787048, 15142932, -4603833,
    -32645430, -21873905, 37802637, 72957598, 679378, -130719986,
    -128782108, 145907742, 572094131, 826246933, 692159756, 285356445,
    -67844658, -155488711, -44235240, 62197678, 57556762, -5403742,
    -35434947, -15181469, 11498864, 13590042, 832229, -5979884,
    -3042362, 1086130, 1510542, 220132, -287288, -97916,
    -260541, -42779, 1162611, 1581798, -1607784, -5834765,
    -2283655, 10399210, 14820419, -6074668, -33370447, -19877011,
    40878685, 72267001, -5372788, -135391996, -122114955, 164920613,
    590785891, 829137518, 676727330, 264699695, -78580071, -153204261,
    -37549871, 64592481, 55051536, -8085611, -35385902, -13656727,
    12217982, 13130208, 260093, -6012423, -2801298, 1193396,
    1459680, 169764, -286283, -87799, -268033, -5707,
    1226360, 1523478, -1841813, -5912496, -1821291, 10993273,
    14432452, -7567474, -33994744, -17753382, 43890975, 71299457,
    -11576644, -139727067, -114768548, 184292082, 609026158, 831068094,
    660663229, 244228756, -88644384, -150462632, -30921018, 66699230,
    52419836, -10667738, -35213220, -12127366, 12871185, 12637713,
    -292695, -6021056, -2559738, 1290695, 1405413, 121920,
    -283729, -78138, -274478, 34126, 1288343, 1455625,
    -2079065, -5970136, -1334626, 11566328, 13978447, -9077317,
    -34513183, -15507304, 46826985, 70050935, -17914911, -143700189,
    -106741099, 203989800, 626777027, 832034440, 644001428, 223980237,
    -98032508, -147286753, -24369393, 68518276, 49674134, -13143621,
    -34920878, -10599059, 13458057, 12115449, -824703, -6006650,
    -2318676, 1378074, 1348163, 76684, -279752, -68970,
];

pub static SRC_INT32_21_40_3968_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_40_3968_5000",
    input_stride: 19,
    output_stride: 10,
    subfilter_count: 21,
    subfilter_length: 96,
    block_in: 40,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_40_3968_5000_FIR),
};

static SRC_INT32_21_40_3968_5000_FIR: [i32; 2016] = [
    37192, 24739, -97621, -84751, 183162, 210312,
    -283092, -433725, 372000, 788484, -405785, -1303070,
    319103, 1992779, -25131, -2850145, -581617, 3834879,
    1619034, -4864391, -3207765, 5806024, 5458722, -6471815,
    -8458887, 6616019, 12256981, -5934551, -16850879, 4063757,
    22178789, -572944, -28116108, -5060574, 34479718, 13517649,
    -41041491, -25800317, 47553973, 43642227, -53796939, -70656757,
    59679013, 116282264, -65573309, -215647302, 74534561, 693554475,
    1010868352, 665492740, 49524319, -216415035, -53874955, 119164526,
    52724437, -73893192, -49392069, 46789935, 44769194, -28681606,
    -39365025, 16049096, 33579953, -7207663, -27755822, 1187016,
    22179357, 2671247, -17075661, -4874161, 12602609, 5842581,
    -8849781, -5935460, 5842785, 5456580, -3552410, -4654883,
    1907270, 3724028, -808218, -2803836, 142769, 1984575,
    202011, -1313928, -329299, 805875, 325606, -450403,
    -257322, 222940, 170335, -92582, -92091, 28485,
    39040, 20660, -102830, -76177, 195415, 196204,
    -308063, -414374, 417541, 766645, -481764, -1285321,
    436748, 1990965, -195771, -2882731, -348489, 3927985,
    1318372, -5052285, -2842178, 6130842, 5042151, -6982353,
    -8020582, 7365510, 11845631, -6977440, -16538873, 5451608,
    22066881, -2349652, -28339349, -2864086, 35216724, 10889351,
    -42531875, -22754599, 50135659, 40233187, -57995673, -67013997,
    66458259, 112754559, -77238981, -213761811, 100415110, 720871467,
    1009190108, 636766543, 25437707, -216097537, -42199173, 121400751,
    45631182, -76713899, -44805546, 49664324, 41797577, -31386227,
    -37512921, 18472265, 32523701, -9295257, -27261787, 2921677,
    22069815, 1281051, -17213085, -3801749, 12881561, 5049335,
    -9191894, -5376288, 6192839, 5084581, -3874673, -4425113,
    2181816, 3596253, -1027257, -2744257, 307130, 1966569,
    86057, -1317970, -252703, 818823, 278617, -464385,
    -230909, 234062, 157021, -99652, -86282, 31891,
    40749, 16260, -107674, -66883, 207009, 180651,
    -332081, -392385, 461972, 740374, -556831, -1260638,
    554353, 1978965, -368324, -2901202, -109923, 4002604,
    1006632, -5217306, -2457215, 6429062, 4594758, -7464171,
    -7536496, 8086985, 11369855, -7997375, -16140214, 6827770,
    21842950, -4134376, -28422901, -628658, 35785444, 8176239,
    -43826539, -19557657, 52498800, 36576250, -61964443, -62976434,
    73025722, 108585036, -88815536, -210729453, 127109037, 747365163,
    1005838664, 607457608, 2324289, -214730588, -30599836, 122993323,
    38435929, -79111614, -40062392, 52254893, 38656089, -33902955,
    -35496367, 20776395, 31317938, -11313665, -26637926, 4622704,
    21851928, -99945, -17263458, -2722789, 13093229, 4240469,
    -9484113, -4797372, 6507572, 4692182, -4173246, -4176513,
    2441495, 3452449, -1237751, -2671921, 467182, 1939025,
    -28196, -1315308, -176392, 827357, 231288, -475664,
    -204005, 243662, 143305, -105949, -80238, 34952,
    42299, 11551, -112110, -56895, 217861, 163693,
    -354994, -367811, 505033, 709715, -630578, -1229014,
    671310, 1956661, -541938, -2905236, 132951, 4058075,
    685236, -5358292, -2054561, 6698820, 4118407, -7914470,
    -7008508, 8776469, 10831292, -8988955, -15655919, 8185194,
    21506868, -5918245, -28364790, 1634943, 36181127, 5390914,
    -44916707, -16223606, 54628830, 32686256, -65680210, -58557687,
    79345320, 103780390, -100245568, -206524697, 154555977, 772959009,
    1000824090, 577648823, -19770260, -212353034, -19129244, 123947539,
    31175215, -81081206, -35188032, 54552663, 35362316, -36221619,
    -33327232, 22951434, 29970301, -13253645, -25888762, 6282023,
    21527977, -1464979, -17227513, -1642729, 13237344, 3420202,
    -9725592, -4201849, 6785866, 4281613, -4446957, -3910592,
    2685220, 3293577, -1438775, -2587399, 622191, 1902248,
    -140199, -1306084, -100746, 831527, 183868, -484246,
    -176764, 251733, 129273, -111464, -74003, 37666,
    43671, 6548, -116098, -46247, 227887, 145385,
    -376650, -340718, 546467, 674731, -702594, -1190478,
    787005, 1923985, -715743, -2894575, 378962, 4093828,
    355677, -5474190, -1636016, 6938372, 3615133, -8330581,
    -6438743, 9430101, 10231914, -9946859, -15087447, 9516844,
    21059067, -7692297, -28163730, 3915687, 36399838, 2546480,
    -45794517, -12767415, 56512150, 28579389, -69120840, -53773444,
    85381521, 98350411, -111470917, -201125739, 182692298, 797578726,
    994161447, 547423949, -40804278, -209006603, -7837936, 124271536,
    23885268, -82619675, -30208175, 56550197, 31934374, -38333143,
    -31017999, 24988079, 28489045, -15106444, -25019392, 7891854,
    21100748, -2807444, -17106407, -566955, 13313980, 2592758,
    -9915746, -3592898, 7026799, 3855167, -4694778, -3628925,
    2912001, 3120661, -1629467, -2491312, 771462, 1856585,
    -249428, -1290470, -26138, 831406, 136604, -490153,
    -149337, 258274, 115010, -116194, -67620, 40030,
    44845, 1269, -119596, -34975, 237007, 125786,
    -396901, -311189, 586021, 635513, -772472, -1145095,
    900819, 1880921, -888850, -2869037, 626903, 4109384,
    19510, -5564057, -1203483, 7146106, 3087133, -8709971,
    -5829565, 10044155, 9574024, -10865875, -14436696, 10815737,
    20500548, -9447518, -27819140, 6202336, 36438478, -343513,
    -46453074, -9204838, 58136213, 24273123, -72265225, -48641412,
    91099511, 92308002, -122432888, -194514628, 211451306, 821152566,
    985870729, 516867328, -60740220, -204735701, 3225479, 123976200,
    16601846, -83726135, -25148680, 58241617, 28390811, -40229577,
    -28581698, 26877817, 26882996, -16863840, -24035451, 9444751,
    20573509, -4120917, -16901708, 499225, 13323547, 1762345,
    -10054254, -2973726, 7229650, 3415184, -4915819, -3333142,
    3120950, 2934779, -1809031, -2384332, 914339, 1802425,
    -355380, -1268670, 47073, 827085, 89734, -493419,
    -121871, 263294, 100598, -120139, -61130, 42047,
    45803, -4266, -122565, -23122, 245145, 104966,
    -415602, -279320, 623445, 592174, -839805, -1092968,
    1012132, 1827509, -1060362, -2828510, 875542, 4104360,
    -321652, -5627071, -758965, 7320548, 2536759, -9050262,
    -5183563, 10615059, 8860250, -11740929, -13706004, 12074975,
    19832879, -11174889, -27331148, 8483496, 36294817, -3265133,
    -46886494, -5552354, 59489595, 19786149, -75093403, -43181268,
    96465373, 85669179, -133072479, -186677393, 240763441, 843611566,
    975976796, 486063598, -79544743, -199587209, 14014490, 123075073,
    9360081, -84401783, -20035436, 59622615, 24750512, -41904121,
    -26031836, 28612953, 25161496, -18518172, -22943082, 10933629,
    19949989, -5399193, -16615383, 1550617, 13266784, 933138,
    -10141059, -2347551, 7393895, 2964044, -5109342, -3024924,
    3311277, 2737059, -1976737, -2267174, 1050210, 1740190,
    -457581, -1240914, 118545, 818678, 43490, -494091,
    -94510, 266811, 86121, -123306, -54574, 43721,
    46527, -10035, -124968, -10734, 252224, 83002,
    -432616, -245224, 658493, 544853, -904193, -1034237,
    1120325, 1763841, -1229375, -2772960, 1123620, 4078471,
    -666147, -5662537, -304550, 7460375, 1966505, -9349246,
    -4503547, 11139418, 8093529, -12567106, -12898133, 13287782,
    19058193, -12865432, -26700607, 10747676, 35967509, -6204130,
    -47089942, -1827084, 60562064, 15138299, -77586668, -37414595,
    101446258, 78453057, -143330613, -177604146, 270556499, 864889796,
    964509282, 455097398, -97188781, -193610263, 24484836, 121584244,
    2194320, -84649869, -14894232, 60690450, 21032606, -43351146,
    -23382325, 30186646, 23334356, -20062374, -21748899, 12351803,
    19234354, -6636311, -16249783, 2582156, 13144752, 109255,
    -10176361, -1717586, 7519213, 2504147, -5274755, -2705990,
    3482300, 2528672, -2131930, -2140592, 1178509, 1670338,
    -555582, -1207458, 187947, 806315, -1903, -492230,
    -67395, 268848, 71657, -125705, -47994, 45058,
    46999, -16012, -126770, 2138, 258175, 59982,
    -447806, -209026, 690930, 493710, -965244, -969077,
    1224783, 1690063, -1394981, -2702427, 1369866, 4031538,
    -1012274, -5669886, 157594, 7564422, 1378998, -9604894,
    -3792532, 11614031, 7277102, -13339684, -12016269, 14447541,
    18179185, -14510251, -25929090, 12983338, 35456111, -9146003,
    -47059674, 1953276, 61344648, 10350471, -79727675, -31364806,
    106010554, 70681826, -153148369, -167289172, 300755861, 884924590,
    951502489, 424053084, -113647598, -186856040, 34594648, 119522232,
    -4862014, -84475646, -9750640, 61443945, 17256364, -44566208,
    -20647408, 31592926, 21411803, -21490004, -20459946, 13693009,
    18431182, -7826582, -15807626, 3588937, 12958827, -705262,
    -10160617, -1087023, 7605480, 2037910, -5411615, -2378086,
    3633445, 2310824, -2274026, -2005377, 1298718, 1593356,
    -648966, -1168582, 254969, 790146, -46234, -487907,
    -40660, 269437, 57284, -127348, -41427, 46064,
    47204, -22171, -127938, 15437, 262931, 36000,
    -461047, -170867, 720527, 438931, -1022572, -897703,
    1324902, 1606379, -1556275, -2617031, 1612994, 3963484,
    -1358298, -5648688, 625229, 7631690, 776988, -9815374,
    -3053727, 12035910, 6414498, -14054156, -11064005, 15547825,
    17199106, -16100584, -25018896, 15178962, 34761095, -12076071,
    -46793063, 5770542, 61829693, 5444532, -81500551, -25057065,
    110128056, 62380712, -162467222, -155731005, 331284732, 903656770,
    936995262, 393014437, -128900826, -179377524, 44304579, 116909862,
    -11776569, -83886320, -4629893, 61883469, 13441111, -45546054,
    -17841585, 32826719, 19404421, -22795269, -19083665, 14951436,
    17545436, -8964612, -15291984, 4566233, 12710686, -1506464,
    -10094533, -459016, 7652771, 1567747, -5519629, -2042983,
    3764244, 2084754, -2402516, -1862351, 1410368, 1509759,
    -737344, -1124591, 319319, 770336, -89297, -481204,
    -14434, 268616, 43076, -128253, -34910, 46749,
    47125, -28480, -128442, 29105, 266431, 11158,
    -472217, -130902, 747064, 380724, -1075807, -820363,
    1420087, 1513044, -1712361, -2516969, 1851718, 3874340,
    -1702459, -5598652, 1096061, 7661355, 163333, -9979057,
    -2290520, 12402298, 5509521, -14706256, -10045330, 16582436,
    16121748, -17627844, -23973044, 17323096, 33883857, -14979541,
    -46288628, 9606124, 62010920, 443234, -82890983, -18518194,
    113770128, 53577921, -171229281, -142932490, 362064388, 921030855,
    921030855, 362064388, -142932490, -171229281, 53577921, 113770128,
    -18518194, -82890983, 443234, 62010920, 9606124, -46288628,
    -14979541, 33883857, 17323096, -23973044, -17627844, 16121748,
    16582436, -10045330, -14706256, 5509521, 12402298, -2290520,
    -9979057, 163333, 7661355, 1096061, -5598652, -1702459,
    3874340, 1851718, -2516969, -1712361, 1513044, 1420087,
    -820363, -1075807, 380724, 747064, -130902, -472217,
    11158, 266431, 29105, -128442, -28480, 47125,
    46749, -34910, -128253, 43076, 268616, -14434,
    -481204, -89297, 770336, 319319, -1124591, -737344,
    1509759, 1410368, -1862351, -2402516, 2084754, 3764244,
    -2042983, -5519629, 1567747, 7652771, -459016, -10094533,
    -1506464, 12710686, 4566233, -15291984, -8964612, 17545436,
    14951436, -19083665, -22795269, 19404421, 32826719, -17841585,
    -45546054, 13441111, 61883469, -4629893, -83886320, -11776569,
    116909862, 44304579, -179377524, -128900826, 393014437, 936995262,
    903656770, 331284732, -155731005, -162467222, 62380712, 110128056,
    -25057065, -81500551, 5444532, 61829693, 5770542, -46793063,
    -12076071, 34761095, 15178962, -25018896, -16100584, 17199106,
    15547825, -11064005, -14054156, 6414498, 12035910, -3053727,
    -9815374, 776988, 7631690, 625229, -5648688, -1358298,
    3963484, 1612994, -2617031, -1556275, 1606379, 1324902,
    -897703, -1022572, 438931, 720527, -170867, -461047,
    36000, 262931, 15437, -127938, -22171, 47204,
    46064, -41427, -127348, 57284, 269437, -40660,
    -487907, -46234, 790146, 254969, -1168582, -648966,
    1593356, 1298718, -2005377, -2274026, 2310824, 3633445,
    -2378086, -5411615, 2037910, 7605480, -1087023, -10160617,
    -705262, 12958827, 3588937, -15807626, -7826582, 18431182,
    13693009, -20459946, -21490004, 21411803, 31592926, -20647408,
    -44566208, 17256364, 61443945, -9750640, -84475646, -4862014,
    119522232, 34594648, -186856040, -113647598, 424053084, 951502489,
    884924590, 300755861, -167289172, -153148369, 70681826, 106010554,
    -31364806, -79727675, 10350471, 61344648, 1953276, -47059674,
    -9146003, 35456111, 12983338, -25929090, -14510251, 18179185,
    14447541, -12016269, -13339684, 7277102, 11614031, -3792532,
    -9604894, 1378998, 7564422, 157594, -5669886, -1012274,
    4031538, 1369866, -2702427, -1394981, 1690063, 1224783,
    -969077, -965244, 493710, 690930, -209026, -447806,
    59982, 258175, 2138, -126770, -16012, 46999,
    45058, -47994, -125705, 71657, 268848, -67395,
    -492230, -1903, 806315, 187947, -1207458, -555582,
    1670338, 1178509, -2140592, -2131930, 2528672, 3482300,
    -2705990, -5274755, 2504147, 7519213, -1717586, -10176361,
    109255, 13144752, 2582156, -16249783, -6636311, 19234354,
    12351803, -21748899, -20062374, 23334356, 30186646, -23382325,
    -43351146, 21032606, 60690450, -14894232, -84649869, 2194320,
    121584244, 24484836, -193610263, -97188781, 455097398, 964509282,
    864889796, 270556499, -177604146, -143330613, 78453057, 101446258,
    -37414595, -77586668, 15138299, 60562064, -1827084, -47089942,
    -6204130, 35967509, 10747676, -26700607, -12865432, 19058193,
    13287782, -12898133, -12567106, 8093529, 11139418, -4503547,
    -9349246, 1966505, 7460375, -304550, -5662537, -666147,
    4078471, 1123620, -2772960, -1229375, 1763841, 1120325,
    -1034237, -904193, 544853, 658493, -245224, -432616,
    83002, 252224, -10734, -124968, -10035, 46527,
    43721, -54574, -123306, 86121, 266811, -94510,
    -494091, 43490, 818678, 118545, -1240914, -457581,
    1740190, 1050210, -2267174, -1976737, 2737059, 3311277,
    -3024924, -5109342, 2964044, 7393895, -2347551, -10141059,
    933138, 13266784, 1550617, -16615383, -5399193, 19949989,
    10933629, -22943082, -18518172, 25161496, 28612953, -26031836,
    -41904121, 24750512, 59622615, -20035436, -84401783, 9360081,
    123075073, 14014490, -199587209, -79544743, 486063598, 975976796,
    843611566, 240763441, -186677393, -133072479, 85669179, 96465373,
    -43181268, -75093403, 19786149, 59489595, -5552354, -46886494,
    -3265133, 36294817, 8483496, -27331148, -11174889, 19832879,
    12074975, -13706004, -11740929, 8860250, 10615059, -5183563,
    -9050262, 2536759, 7320548, -758965, -5627071, -321652,
    4104360, 875542, -2828510, -1060362, 1827509, 1012132,
    -1092968, -839805, 592174, 623445, -279320, -415602,
    104966, 245145, -23122, -122565, -4266, 45803,
    42047, -61130, -120139, 100598, 263294, -121871,
    -493419, 89734, 827085, 47073, -1268670, -355380,
    1802425, 914339, -2384332, -1809031, 2934779, 3120950,
    -3333142, -4915819, 3415184, 7229650, -2973726, -10054254,
    1762345, 13323547, 499225, -16901708, -4120917, 20573509,
    9444751, -24035451, -16863840, 26882996, 26877817, -28581698,
    -40229577, 28390811, 58241617, -25148680, -83726135, 16601846,
    123976200, 3225479, -204735701, -60740220, 516867328, 985870729,
    821152566, 211451306, -194514628, -122432888, 92308002, 91099511,
    -48641412, -72265225, 24273123, 58136213, -9204838, -46453074,
    -343513, 36438478, 6202336, -27819140, -9447518, 20500548,
    10815737, -14436696, -10865875, 9574024, 10044155, -5829565,
    -8709971, 3087133, 7146106, -1203483, -5564057, 19510,
    4109384, 626903, -2869037, -888850, 1880921, 900819,
    -1145095, -772472, 635513, 586021, -311189, -396901,
    125786, 237007, -34975, -119596, 1269, 44845,
    40030, -67620, -116194, 115010, 258274, -149337,
    -490153, 136604, 831406, -26138, -1290470, -249428,
    1856585, 771462, -2491312, -1629467, 3120661, 2912001,
    -3628925, -4694778, 3855167, 7026799, -3592898, -9915746,
    2592758, 13313980, -566955, -17106407, -2807444, 21100748,
    7891854, -25019392, -15106444, 28489045, 24988079, -31017999,
    -38333143, 31934374, 56550197, -30208175, -82619675, 23885268,
    124271536, -7837936, -209006603, -40804278, 547423949, 994161447,
    797578726, 182692298, -201125739, -111470917, 98350411, 85381521,
    -53773444, -69120840, 28579389, 56512150, -12767415, -45794517,
    2546480, 36399838, 3915687, -28163730, -7692297, 21059067,
    9516844, -15087447, -9946859, 10231914, 9430101, -6438743,
    -8330581, 3615133, 6938372, -1636016, -5474190, 355677,
    4093828, 378962, -2894575, -715743, 1923985, 787005,
    -1190478, -702594, 674731, 546467, -340718, -376650,
    145385, 227887, -46247, -116098, 6548, 43671,
    37666, -74003, -111464, 129273, 251733, -176764,
    -484246, 183868, 831527, -100746, -1306084, -140199,
    1902248, 622191, -2587399, -1438775, 3293577, 2685220,
    -3910592, -4446957, 4281613, 6785866, -4201849, -9725592,
    3420202, 13237344, -1642729, -17227513, -1464979, 21527977,
    6282023, -25888762, -13253645, 29970301, 22951434, -33327232,
    -36221619, 35362316, 54552663, -35188032, -81081206, 31175215,
    123947539, -19129244, -212353034, -19770260, 577648823, 1000824090,
    772959009, 154555977, -206524697, -100245568, 103780390, 79345320,
    -58557687, -65680210, 32686256, 54628830, -16223606, -44916707,
    5390914, 36181127, 1634943, -28364790, -5918245, 21506868,
    8185194, -15655919, -8988955, 10831292, 8776469, -7008508,
    -7914470, 4118407, 6698820, -2054561, -5358292, 685236,
    4058075, 132951, -2905236, -541938, 1956661, 671310,
    -1229014, -630578, 709715, 505033, -367811, -354994,
    163693, 217861, -56895, -112110, 11551, 42299,
    34952, -80238, -105949, 143305, 243662, -204005,
    -475664, 231288, 827357, -176392, -1315308, -28196,
    1939025, 467182, -2671921, -1237751, 3452449, 2441495,
    -4176513, -4173246, 4692182, 6507572, -4797372, -9484113,
    4240469, 13093229, -2722789, -17263458, -99945, 21851928,
    4622704, -26637926, -11313665, 31317938, 20776395, -35496367,
    -33902955, 38656089, 52254893, -40062392, -79111614, 38435929,
    122993323, -30599836, -214730588, 2324289, 607457608, 1005838664,
    747365163, 127109037, -210729453, -88815536, 108585036, 73025722,
    -62976434, -61964443, 36576250, 52498800, -19557657, -43826539,
    8176239, 35785444, -628658, -28422901, -4134376, 21842950,
    6827770, -16140214, -7997375, 11369855, 8086985, -7536496,
    -7464171, 4594758, 6429062, -2457215, -5217306, 1006632,
    4002604, -109923, -2901202, -368324, 1978965, 554353,
    -1260638, -556831, 740374, 461972, -392385, -332081,
    180651, 207009, -66883, -107674, 16260, 40749,
    31891, -86282, -99652, 157021, 234062, -230909,
    -464385, 278617, 818823, -252703, -1317970, 86057,
    1966569, 307130, -2744257, -1027257, 3596253, 2181816,
    -4425113, -3874673, 5084581, 6192839, -5376288, -9191894,
    5049335, 12881561, -3801749, -17213085, 1281051, 22069815,
    2921677, -27261787, -9295257, 32523701, 18472265, -37512921,
    -31386227, 41797577, 49664324, -44805546, -76713899, 45631182,
    121400751, -42199173, -216097537, 25437707, 636766543, 1009190108,
    720871467, 100415110, -213761811, -77238981, 112754559, 66458259,
    -67013997, -57995673, 40233187, 50135659, -22754599, -42531875,
    10889351, 35216724, -2864086, -28339349, -2349652, 22066881,
    5451608, -16538873, -6977440, 11845631, 7365510, -8020582,
    -6982353, 5042151, 6130842, -2842178, -5052285, 1318372,
    3927985, -348489, -2882731, -195771, 1990965, 436748,
    -1285321, -481764, 766645, 417541, -414374, -308063,
    196204, 195415, -76177, -102830, 20660, 39040,
    28485, -92091, -92582, 170335, 222940, -257322,
    -450403, 325606, 805875, -329299, -1313928, 202011,
    1984575, 142769, -2803836, -808218, 3724028, 1907270,
    -4654883, -3552410, 5456580, 5842785, -5935460, -8849781,
    5842581, 12602609, -4874161, -17075661, 2671247, 22179357,
    1187016, -27755822, -7207663, 33579953, 16049096, -39365025,
    -28681606, 44769194, 46789935, -49392069, -73893192, 52724437,
    119164526, -53874955, -216415035, 49524319, 665492740, 1010868352,
    693554475, 74534561, -215647302, -65573309, 116282264, 59679013,
    -70656757, -53796939, 43642227, 47553973, -25800317, -41041491,
    13517649, 34479718, -5060574, -28116108, -572944, 22178789,
    4063757, -16850879, -5934551, 12256981, 6616019, -8458887,
    -6471815, 5458722, 5806024, -3207765, -4864391, 1619034,
    3834879, -581617, -2850145, -25131, 1992779, 319103,
    -1303070, -405785, 788484, 372000, -433725, -283092,
    210312, 183162, -84751, -97621, 24739, 37192,
];

pub static SRC_INT32_21_80_3968_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_80_3968_5000",
    input_stride: 19,
    output_stride: 5,
    subfilter_count: 21,
    subfilter_length: 188,
    block_in: 80,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_80_3968_5000_FIR),
};

static SRC_INT32_21_80_3968_5000_FIR: [i32; 3948] = [
    7380, -9270, -31284, -43512, -30398, 11733,
    66402, 100578, 81899, 1880, -109365, -190050,
    -177509, -49410, 149107, 314442, 334016, 155208,
    -165370, -468755, -566381, -349060, 127158, 636841,
    883655, 663658, 7677, -788008, -1284065, -1130503,
    -291292, 874430, 1749714, 1774401, 782888, -829891,
    -2241494, -2606877, -1543904, 570282, 2694796, 3619073,
    2631614, 4008, -3016518, -4774769, -4091679, -1004054,
    3083559, 6004109, 5950477, 2547444, -2742445, -7198339,
    -8208186, -4753839, 1808838, 8205201, 10833691, 7743408,
    -64158, -8823347, -13762300, -11642173, -2756312, 8791646,
    16897097, 16601697, 6995734, -7763563, -20114560, -22849276,
    -13156200, 5242259, 23275130, 30809882, 22102345, -407577,
    -26240577, -41427380, -35631587, -8400859, 28906080, 57182760,
    58431533, 25615699, -31290585, -86590676, -107905275, -69740288,
    34089894, 184866496, 343279916, 462570472, 505512882, 458400544,
    336263227, 177147417, 27838429, -73092406, -108095775, -84475479,
    -28368387, 27872945, 59149895, 56334756, 27170907, -10057017,
    -36437191, -41128826, -25143361, 846338, 22884255, 30802051,
    22582882, 4289910, -13870008, -23002808, -19698774, -7049907,
    7620802, 16839687, 16674400, 8270488, -3284385, -11914845,
    -13673056, -8456928, 366707, 8017793, 10833085, 7960945,
    1469742, -5008729, -8262077, -7047707, -2485792, 2770416,
    6033208, 5922340, 2897642, -1189340, -4184667, -4740930,
    -2888579, 150772, 2722226, 3616117, 2612144, 459446,
    -1624411, -2621568, -2192383, -750262, 849432, 1797072,
    1723947, 820257, -342890, -1154639, -1273330, -753369,
    45290, 685360, 881615, 616265, 101434, -366454,
    -568559, -457610, -148961, 167846, 337544, 309106,
    139446, -57739, -180790, -187918, -104204, 6791,
    84252, 99949, 63968, 9231, -31724, -43408,
    -30318, -8264, 6845, -10291, -32229, -43557,
    -29003, 14267, 68789, 101082, 79399, -3108,
    -114457, -191962, -173952, -40910, 158694, 319436,
    330016, 142227, -181746, -479418, -563455, -331045,
    152973, 656802, 884590, 640913, -30283, -821951,
    -1293263, -1104733, -238900, 927935, 1773473, 1749312,
    714847, -909070, -2288140, -2588793, -1460878, 681179,
    2774627, 3617496, 2537083, -143734, -3141502, -4802827,
    -3992960, -816342, 3266761, 6078845, 5859778, 2319935,
    -2997191, -7340838, -8143691, -4491507, 2147629, 8440583,
    10820733, 7457763, -497393, -9180800, -13834824, -11353383,
    -2221788, 9304777, 17099930, 16341566, 6358281, -8471700,
    -20507660, -22666241, -12421557, 6194012, 23942702, 30779234,
    21287502, -1669757, -27312945, -41676374, -34774989, -6720259,
    30620597, 57967310, 57632521, 23300651, -34210526, -88627483,
    -107576078, -66234307, 40451935, 192604402, 350206013, 466562605,
    505302964, 454055922, 329160967, 169452237, 21700872, -76290077,
    -108149615, -82285423, -25447383, 30070359, 59787575, 55424921,
    25417365, -11686920, -37191217, -40781452, -24022824, 2090502,
    23632487, 30755999, 21866969, 3338147, -14562227, -23126823,
    -19260952, -6331650, 8232781, 17055367, 16432229, 7741994,
    -3805387, -12171151, -13567298, -8082049, 794679, 8280638,
    10818991, 7708171, 1130767, -5255902, -8305358, -6889177,
    -2227562, 2988597, 6107915, 5833683, 2709259, -1371984,
    -4271844, -4701390, -2757863, 296382, 2808832, 3608661,
    2526795, 348809, -1702314, -2632873, -2140887, -670288,
    914407, 1817315, 1696220, 765489, -393635, -1177122,
    -1261086, -718083, 82512, 706001, 878482, 595108,
    75832, -383209, -569995, -446003, -132541, 180130,
    340601, 303439, 129726, -65887, -183795, -185572,
    -98982, 11619, 86456, 99199, 61492, 6763,
    -32978, -43245, -29332, -7273, 6282, -11324,
    -33149, -43540, -27538, 16830, 71126, 101458,
    76754, -8168, -119473, -193650, -170121, -32247,
    168196, 324077, 325543, 128916, -198069, -489580,
    -559777, -312425, 178848, 676118, 884407, 617145,
    -68545, -855149, -1300901, -1077346, -185774, 980697,
    1795178, 1721817, 645384, -987695, -2332245, -2567314,
    -1375418, 791996, 2851518, 3611356, 2438726, -292272,
    -3263353, -4825031, -3888598, -626425, 3447001, 6146413,
    5761176, 2088148, -3249697, -7474976, -8068610, -4222020,
    2485689, 8666747, 10794148, 7161150, -932468, -9528789,
    -13890443, -11048746, -1681444, 9809192, 17282532, 16059491,
    5709166, -9173403, -20877449, -22453752, -11666867, 7143982,
    24584610, 30709889, 20440511, -2938697, -28358958, -41875125,
    -33868043, -5017077, 32312174, 58686838, 56752988, 20929919,
    -37124718, -90582401, -107106252, -62575183, 46921105, 200356019,
    357036549, 470373971, 504883285, 449539832, 321978206, 161785983,
    15680437, -79332854, -108068933, -80024073, -22530983, 32205999,
    60344633, 54454939, 23647745, -13288800, -37893150, -40386048,
    -22880510, 3323452, 24346347, 30672033, 21128426, 2388144,
    -15232129, -23221343, -18801767, -5609709, 8830985, 17248598,
    16170996, 7206864, -4318710, -12410864, -13445250, -7699227,
    1219241, 8531681, 10791504, 7447243, 792334, -5495095,
    -8338038, -6722993, -1968088, 3201746, 6174553, 5738293,
    2518660, -1551773, -4353136, -4656233, -2624553, 440663,
    2891351, 3596745, 2438874, 238508, -1777535, -2640801,
    -2087088, -590071, 977742, 1835123, 1666584, 710200,
    -443470, -1197938, -1247360, -682201, 119299, 725564,
    874270, 573401, 50385, -399312, -570694, -433952,
    -116131, 192046, 343188, 297451, 119960, -73846,
    -186523, -183019, -93707, 16359, 88513, 98330,
    58978, 4334, -34162, -43026, -28327, -6298,
    5690, -12368, -34043, -43461, -26005, 19419,
    73408, 101705, 73964, -13294, -124404, -195107,
    -166016, -23430, 177597, 328355, 320599, 115290,
    -214316, -499222, -555345, -293218, 204748, 694758,
    883096, 592375, -107061, -887551, -1306954, -1048364,
    -131976, 1032645, 1814786, 1691934, 574576, -1065664,
    -2373733, -2542444, -1287617, 902594, 2925350, 3600631,
    2336643, -441425, -3381897, -4841315, -3778688, -434529,
    3624032, 6206682, 5654746, 1852346, -3499633, -7600536,
    -7982977, -3945673, 2822590, 8883354, 10753892, 6853878,
    -1368848, -9866825, -13928991, -10728552, -1135924, 10304212,
    17444558, 15755697, 5049131, -9867757, -21223328, -22211897,
    -10892946, 8090975, 25199891, 30601681, 19562207, -4212872,
    -29377131, -42023006, -32911466, -3293212, 33978537, 59339843,
    55793154, 18505709, -40029637, -92451977, -106493974, -58763775,
    53493847, 208116196, 363766611, 474001730, 504254161, 444855625,
    314720055, 154153631, 9780221, -82220429, -107855969, -77695024,
    -19622551, 34278017, 60821223, 53426548, 21864334, -14860938,
    -38542541, -39943459, -21717978, 4543749, 25025183, 30550503,
    20368310, 1441063, -15879022, -23286430, -18321913, -4885002,
    9414752, 17419266, 15891133, 6665801, -4823758, -12633780,
    -13307155, -7308981, 1639884, 8770677, 10750735, 7178534,
    454863, -5726056, -8360136, -6549409, -1707701, 3409626,
    6233088, 5636329, 2326099, -1728500, -4428481, -4605554,
    -2488832, 583443, 2969705, 3580415, 2348509, 128681,
    -1849998, -2645366, -2031071, -509713, 1039371, 1850493,
    1635092, 654464, -492341, -1217075, -1232184, -645773,
    155607, 744035, 868995, 551177, 25124, -414747,
    -570662, -421478, -99753, 203585, 345308, 291155,
    110160, -81608, -188974, -180265, -88386, 21005,
    90420, 97346, 56430, 1944, -35275, -42750,
    -27307, -5341, 5070, -13423, -34910, -43319,
    -24405, 22031, 75631, 101819, 71031, -18481,
    -129243, -196329, -161640, -14470, 186884, 332259,
    315184, 101361, -230465, -508327, -550157, -273443,
    230641, 712691, 880649, 566625, -145786, -919111,
    -1311403, -1017812, -77569, 1083705, 1832255, 1659682,
    502503, -1142872, -2412532, -2514189, -1197568, 1012830,
    2996009, 3585302, 2230937, -591009, -3496964, -4851622,
    -3663333, -240883, 3797613, 6259533, 5540577, 1612804,
    -3746670, -7717309, -7886835, -3662775, 3157902, 9090079,
    10699938, 6536273, -1805996, -10194427, -13950324, -10393115,
    -585880, 10789164, 17585689, 15430440, 4378937, -10553854,
    -21544722, -21940799, -10100641, 9033794, 25787609, 30454488,
    18653465, -5490739, -30366001, -42119445, -31906036, -1550606,
    35617419, 59924885, 54753339, 16030310, -42921725, -94232796,
    -105737531, -54801078, 60166495, 215879747, 370391345, 477443176,
    503416065, 440006771, 307391664, 146560104, 4003202, -84952626,
    -107513062, -75301895, -16725405, 36284653, 61217589, 52341537,
    20069419, -16401663, -39139006, -39454581, -20536802, 5749979,
    25668394, 30391802, 19587695, 498058, -16502244, -23322177,
    -17822107, -4158443, 9983441, 17567291, 15593095, 6119511,
    -5319950, -12839716, -13153277, -6911839, 2056106, 8997396,
    10696810, 6902421, 118769, -5948543, -8371687, -6368683,
    -1446733, 3612007, 6283496, 5527959, 2131827, -1901964,
    -4497820, -4549449, -2350886, 724552, 3043824, 3559721,
    2255830, 19461, -1919631, -2646588, -1972923, -429319,
    1099228, 1863423, 1601797, 598355, -540192, -1234522,
    -1215587, -608851, 191396, 761399, 862672, 528470,
    78, -429503, -569908, -408602, -83427, 214734,
    346962, 284562, 100341, -89166, -191149, -177315,
    -83028, 25554, 92178, 96249, 53853, -402,
    -36317, -42422, -26272, -4403, 4422, -14486,
    -35746, -43111, -22737, 24662, 77791, 101799,
    67957, -23721, -133982, -197311, -156994, -5376,
    196045, 335781, 309300, 87146, -246495, -516877,
    -544211, -253120, 256494, 729887, 877059, 539920,
    -184671, -949779, -1314226, -985714, -22618, 1133805,
    1847545, 1625083, 429247, -1219215, -2448575, -2482561,
    -1105370, 1122562, 3063384, 3565358, 2121716, -740837,
    -3608385, -4855900, -3542646, -45720, 3967503, 6304853,
    5418764, 1369799, -3990480, -7825096, -7780246, -3373641,
    3491195, 9286606, 10632274, 6208674, -2243367, -10511127,
    -13954317, -10042766, -31974, 11263385, 17705629, 15084001,
    3699362, -11230790, -21841086, -21640621, -9290824, 9971240,
    26346858, 30268234, 17715207, -6770744, -31324130, -42163930,
    -30852601, 208762, 37226569, 60440592, 53633956, 13506096,
    -45797396, -95921494, -104835325, -50688224, 66935276, 223641456,
    376905964, 480695741, 502369628, 434996858, 299998218, 139010264,
    -1647769, -87529406, -107042641, -72848327, -13842810, 38224242,
    61534065, 51201747, 18265280, -17909356, -39682232, -38920358,
    -19338565, 6940752, 26275424, 30196369, 18787677, -439729,
    -17101168, -23328716, -17303087, -3430946, 10536433, 17692617,
    15277355, 5568702, -5806719, -13028512, -12983895, -6508336,
    2467414, 9211625, 10629871, 6619293, -215537, -6162328,
    -8372738, -6181084, -1185511, 3808671, 6325761, 5413357,
    1936099, -2071968, -4561106, -4488026, -2210902, 863825,
    3113644, 3534718, 2160970, -89019, -1986367, -2644488,
    -1912732, -348987, 1157252, 1873917, 1566755, 541947,
    -586971, -1250272, -1197605, -571485, 226624, 777645,
    855320, 505313, -24722, -443566, -568439, -395344,
    -67173, 225484, 348155, 277684, 90516, -96512,
    -193048, -174178, -77639, 30000, 93787, 95044,
    51249, -2703, -37287, -42040, -25225, -3484,
    3746, -15555, -36551, -42838, -21004, 27308,
    79884, 101641, 64743, -29009, -138612, -198048,
    -152083, 3842, 205064, 338911, 302950, 72659,
    -262383, -524855, -537508, -232270, 282273, 746317,
    872318, 512285, -223669, -979511, -1315408, -952099,
    32813, 1182874, 1860621, 1588163, 354892, -1294590,
    -2481795, -2447574, -1011123, 1231649, 3127368, 3540792,
    2009097, -890723, -3715997, -4854105, -3416743, 150725,
    4133467, 6342539, 5289413, 1123616, -4230738, -7923711,
    -7663281, -3078599, 3822040, 9472630, 10550908, 5871433,
    -2680415, -10816466, -13940867, -9677861, 525122, 11726220,
    17804106, 14716691, 3011200, -11897665, -22111901, -21311558,
    -8464396, 10902113, 26876757, 30042893, 16748394, -8051315,
    -32250110, -42156009, -29752070, 1982873, 38803748, 60885660,
    52435515, 10935522, -48653037, -97514758, -103785870, -46426484,
    73796312, 231396086, 383305747, 483756994, 501115635, 429829588,
    292544929, 131508915, -7169962, -89950866, -106447231, -70337978,
    -10977980, 40095212, 61771076, 50009066, 16454188, -19382451,
    -40171967, -38341781, -18124862, 8114711, 26845767, 29964681,
    17969366, -1371170, -17675200, -23306212, -16765609, -2703416,
    11073132, 17795218, 14944406, 5014084, -6283513, -13200028,
    -12799308, -6099009, 2873322, 9413168, 10550075, 6329542,
    -547649, -6367196, -8363350, -5986887, -924365, 3999406,
    6359882, 5292706, 1739168, -2238320, -4618296, -4421394,
    -2069070, 1001099, 3179106, 3505467, 2064062, -196627,
    -2050142, -2639093, -1850589, -268820, 1213383, 1881979,
    1530025, 485313, -632629, -1264319, -1178270, -533727,
    261252, 792762, 846959, 481739, -49248, -456927,
    -566266, -381726, -51011, 235827, 348890, 270534,
    80696, -103639, -194674, -170858, -72228, 34339,
    95246, 93732, 48623, -4956, -38185, -41609,
    -24168, -2587, 3044, -16631, -37322, -42498,
    -19207, 29967, 81906, 101345, 61393, -34338,
    -143128, -198536, -146907, 13172, 213929, 341640,
    296135, 57917, -278106, -532245, -530048, -210913,
    307944, 761953, 866424, 483747, -262729, -1008258,
    -1314932, -916997, 88657, 1230842, 1871449, 1548951,
    279524, -1368896, -2512129, -2409251, -914933, 1339948,
    3187857, 3511605, 1893197, -1040478, -3819639, -4846199,
    -3285750, 348211, 4295270, 6372497, 5152643, 874546,
    -4467120, -8012973, -7536027, -2777984, 4150008, 9647856,
    10455863, 5524918, -3116591, -11109997, -13909891, -9298773,
    1084731, 12177026, 17880874, 14328848, 2315258, -12553588,
    -22356677, -20953848, -7622283, 11825214, 27376461, 29778487,
    15754031, -9330870, -33142559, -42095290, -28605418, 3769679,
    40346738, 61258857, 51158624, 8321123, -51485013, -99009328,
    -102587801, -42017265, 80745629, 239138376, 389586048, 486624646,
    499655028, 424508774, 285037037, 124060789, -12560776, -92217232,
    -105729442, -67774521, -8134069, 41896085, 61929133, 48765427,
    14638402, -20819434, -40608029, -37719891, -16897294, 9270526,
    27378963, 29697260, 17133888, -2295154, -18223779, -23254868,
    -16210449, -1976759, 11592966, 17875098, 14594759, 4456370,
    -6749795, -13354150, -12599832, -5684401, 3273356, 9601846,
    10457595, 6033567, -877163, -6562941, -8343594, -5786373,
    -663620, 4184009, 6385865, 5166192, 1541289, -2400835,
    -4669359, -4349670, -1925577, 1136215, 3240157, 3472033,
    1965243, -303235, -2110898, -2630435, -1786587, -188917,
    1267565, 1887619, 1491667, 428527, -677117, -1276658,
    -1157619, -495627, 295241, 806742, 837606, 457784,
    -73469, -469574, -563397, -367768, -34962, 245752,
    349171, 263124, 70895, -110542, -196026, -167364,
    -66802, 38568, 96557, 92319, 45980, -7158,
    -39013, -41128, -23102, -1711, 2315, -17710,
    -38057, -42091, -17347, 32635, 83853, 100908,
    57908, -39702, -147519, -198770, -141472, 22604,
    222626, 343960, 288860, 42935, -293644, -539031,
    -521833, -189073, 333472, 776768, 859371, 454334,
    -301804, -1035976, -1312785, -880440, 144846, 1277637,
    1879996, 1507479, 203230, -1442028, -2539517, -2367614,
    -816908, 1447317, 3244749, 3477802, 1774142, -1189912,
    -3919155, -4832155, -3149800, 546497, 4452684, 6394642,
    5008580, 622884, -4699307, -8092718, -7398584, -2472142,
    4474670, 9812005, 10347180, 5169512, -3551343, -11391286,
    -13861330, -8905896, 1646167, 12615171, 17935713, 13920838,
    1612360, -13197678, -22574953, -20567762, -6765438, 12739345,
    27845153, 29475084, 14733163, -10607819, -34000126, -41981440,
    -27413683, 5567094, 41853340, 61559023, 49803988, 5665513,
    -54289674, -100402003, -101239869, -37462111, 87779150, 246863051,
    395742299, 489296552, 497988905, 419038335, 277479800, 116670554,
    -17817735, -94328867, -104891971, -65161639, -5314176, 43625479,
    62008837, 47472806, 12820170, -22218849, -40990302, -37055769,
    -15657468, 10406899, 27874602, 29394667, 16282386, -3210583,
    -18746382, -23174919, -15638397, -1251869, 12095385, 17932286,
    14228944, 3896269, -7205044, -13490783, -12385798, -5265058,
    3667051, 9777496, 10352620, 5731774, -1203685, -6749372,
    -8313556, -5579830, -403598, 4362286, 6403726, 5034010,
    1342714, -2559334, -4714269, -4272978, -1780616, 1269018,
    3296749, 3434487, 1864650, -408715, -2168580, -2618546,
    -1720819, -109377, 1319746, 1890849, 1451741, 371662,
    -720388, -1287290, -1135689, -457238, 328553, 819577,
    827285, 433480, -97360, -481499, -559843, -353492,
    -19044, 255252, 349003, 255467, 61126, -117212,
    -197107, -163701, -61368, 42680, 97720, 90808,
    43323, -9309, -39769, -40601, -22030, -857,
    1559, -18791, -38754, -41615, -15426, 35309,
    85720, 100328, 54291, -45094, -151780, -198748,
    -135781, 32127, 231142, 345864, 281129, 27730,
    -308974, -545198, -512866, -166774, 358824, 790734,
    851160, 424077, -340842, -1062621, -1308956, -842463,
    201310, 1323192, 1886234, 1463783, 126101, -1513887,
    -2563904, -2322693, -717158, 1553613, 3297949, 3439395,
    1652060, -1338834, -4014392, -4811950, -3009034, 745338,
    4605484, 6408899, 4857361, 368931, -4926982, -8162787,
    -7251063, -2161425, 4795600, 9964805, 10224917, 4805608,
    -3984119, -11659912, -13795145, -8499643, 2208738, 13040035,
    17968427, 13493054, 903344, -13829060, -22766298, -20153608,
    -5894836, 13643313, 28282050, 29132804, 13686874, -11880560,
    -34821495, -41814191, -26177965, 7373005, 43321381, 61785073,
    48372407, 2971379, -57063349, -101689644, -99740949, -32762699,
    94892707, 254564825, 401770011, 491770710, 496118517, 413422296,
    269878494, 109342799, -22938496, -96286262, -103937597, -62503021,
    -2521334, 45282108, 62010869, 46133217, 11001722, -23579294,
    -41318733, -36350544, -14406996, 11522563, 28332323, 29057502,
    15416011, -4116377, -19242518, -23066633, -15050264, -529637,
    12579868, 17966842, 13847507, 3334492, -7648757, -13609855,
    -12157554, -4841529, 4053951, 9939973, 10235350, 5424572,
    -1526824, -6926311, -8273334, -5367550, -144622, 4534053,
    6413493, 4896360, 1143696, -2713643, -4753009, -4191444,
    -1634377, 1399358, 3348842, 3392904, 1762420, -512943,
    -2223136, -2603466, -1653381, -30297, 1369873, 1891682,
    1410310, 314789, -762398, -1296215, -1112519, -418610,
    361153, 831261, 816017, 408863, -120891, -492694,
    -555618, -338919, -3277, 264319, 348392, 247575,
    51400, -123646, -197920, -159879, -55934, 46674,
    98735, 89201, 40656, -11405, -40454, -40028,
    -20952, -27, 778, -19872, -39412, -41069,
    -13444, 37984, 87504, 99604, 50546, -50507,
    -155902, -198466, -129837, 41730, 239463, 347344,
    272947, 12320, -324073, -550731, -503151, -144038,
    383966, 803825, 841789, 393006, -379795, -1088150,
    -1303435, -803103, 257982, 1367438, 1890137, 1417900,
    48227, -1584371, -2585237, -2274521, -615797, 1658694,
    3347363, 3396400, 1527086, -1487053, -4105203, -4785570,
    -2863597, 944488, 4753448, 6415201, 4699133, 112992,
    -5149833, -8223037, -7093593, -1846196, 5112374, 10106001,
    10089151, 4433615, -4414365, -11915466, -13711319, -8080446,
    2771747, 13451011, 17978851, 13045915, 189058, -14446872,
    -22930315, -19711733, -5011475, 14535929, 28686404, 28751811,
    12616287, -13147489, -35605383, -41593336, -24899427, 9185270,
    44748713, 61935998, 46864782, 241486, -59802361, -102869177,
    -98090039, -27920845, 102082039, 262238404, 407664781, 494045267,
    494045267, 407664781, 262238404, 102082039, -27920845, -98090039,
    -102869177, -59802361, 241486, 46864782, 61935998, 44748713,
    9185270, -24899427, -41593336, -35605383, -13147489, 12616287,
    28751811, 28686404, 14535929, -5011475, -19711733, -22930315,
    -14446872, 189058, 13045915, 17978851, 13451011, 2771747,
    -8080446, -13711319, -11915466, -4414365, 4433615, 10089151,
    10106001, 5112374, -1846196, -7093593, -8223037, -5149833,
    112992, 4699133, 6415201, 4753448, 944488, -2863597,
    -4785570, -4105203, -1487053, 1527086, 3396400, 3347363,
    1658694, -615797, -2274521, -2585237, -1584371, 48227,
    1417900, 1890137, 1367438, 257982, -803103, -1303435,
    -1088150, -379795, 393006, 841789, 803825, 383966,
    -144038, -503151, -550731, -324073, 12320, 272947,
    347344, 239463, 41730, -129837, -198466, -155902,
    -50507, 50546, 99604, 87504, 37984, -13444,
    -41069, -39412, -19872, 778, -27, -20952,
    -40028, -40454, -11405, 40656, 89201, 98735,
    46674, -55934, -159879, -197920, -123646, 51400,
    247575, 348392, 264319, -3277, -338919, -555618,
    -492694, -120891, 408863, 816017, 831261, 361153,
    -418610, -1112519, -1296215, -762398, 314789, 1410310,
    1891682, 1369873, -30297, -1653381, -2603466, -2223136,
    -512943, 1762420, 3392904, 3348842, 1399358, -1634377,
    -4191444, -4753009, -2713643, 1143696, 4896360, 6413493,
    4534053, -144622, -5367550, -8273334, -6926311, -1526824,
    5424572, 10235350, 9939973, 4053951, -4841529, -12157554,
    -13609855, -7648757, 3334492, 13847507, 17966842, 12579868,
    -529637, -15050264, -23066633, -19242518, -4116377, 15416011,
    29057502, 28332323, 11522563, -14406996, -36350544, -41318733,
    -23579294, 11001722, 46133217, 62010869, 45282108, -2521334,
    -62503021, -103937597, -96286262, -22938496, 109342799, 269878494,
    413422296, 496118517, 491770710, 401770011, 254564825, 94892707,
    -32762699, -99740949, -101689644, -57063349, 2971379, 48372407,
    61785073, 43321381, 7373005, -26177965, -41814191, -34821495,
    -11880560, 13686874, 29132804, 28282050, 13643313, -5894836,
    -20153608, -22766298, -13829060, 903344, 13493054, 17968427,
    13040035, 2208738, -8499643, -13795145, -11659912, -3984119,
    4805608, 10224917, 9964805, 4795600, -2161425, -7251063,
    -8162787, -4926982, 368931, 4857361, 6408899, 4605484,
    745338, -3009034, -4811950, -4014392, -1338834, 1652060,
    3439395, 3297949, 1553613, -717158, -2322693, -2563904,
    -1513887, 126101, 1463783, 1886234, 1323192, 201310,
    -842463, -1308956, -1062621, -340842, 424077, 851160,
    790734, 358824, -166774, -512866, -545198, -308974,
    27730, 281129, 345864, 231142, 32127, -135781,
    -198748, -151780, -45094, 54291, 100328, 85720,
    35309, -15426, -41615, -38754, -18791, 1559,
    -857, -22030, -40601, -39769, -9309, 43323,
    90808, 97720, 42680, -61368, -163701, -197107,
    -117212, 61126, 255467, 349003, 255252, -19044,
    -353492, -559843, -481499, -97360, 433480, 827285,
    819577, 328553, -457238, -1135689, -1287290, -720388,
    371662, 1451741, 1890849, 1319746, -109377, -1720819,
    -2618546, -2168580, -408715, 1864650, 3434487, 3296749,
    1269018, -1780616, -4272978, -4714269, -2559334, 1342714,
    5034010, 6403726, 4362286, -403598, -5579830, -8313556,
    -6749372, -1203685, 5731774, 10352620, 9777496, 3667051,
    -5265058, -12385798, -13490783, -7205044, 3896269, 14228944,
    17932286, 12095385, -1251869, -15638397, -23174919, -18746382,
    -3210583, 16282386, 29394667, 27874602, 10406899, -15657468,
    -37055769, -40990302, -22218849, 12820170, 47472806, 62008837,
    43625479, -5314176, -65161639, -104891971, -94328867, -17817735,
    116670554, 277479800, 419038335, 497988905, 489296552, 395742299,
    246863051, 87779150, -37462111, -101239869, -100402003, -54289674,
    5665513, 49803988, 61559023, 41853340, 5567094, -27413683,
    -41981440, -34000126, -10607819, 14733163, 29475084, 27845153,
    12739345, -6765438, -20567762, -22574953, -13197678, 1612360,
    13920838, 17935713, 12615171, 1646167, -8905896, -13861330,
    -11391286, -3551343, 5169512, 10347180, 9812005, 4474670,
    -2472142, -7398584, -8092718, -4699307, 622884, 5008580,
    6394642, 4452684, 546497, -3149800, -4832155, -3919155,
    -1189912, 1774142, 3477802, 3244749, 1447317, -816908,
    -2367614, -2539517, -1442028, 203230, 1507479, 1879996,
    1277637, 144846, -880440, -1312785, -1035976, -301804,
    454334, 859371, 776768, 333472, -189073, -521833,
    -539031, -293644, 42935, 288860, 343960, 222626,
    22604, -141472, -198770, -147519, -39702, 57908,
    100908, 83853, 32635, -17347, -42091, -38057,
    -17710, 2315, -1711, -23102, -41128, -39013,
    -7158, 45980, 92319, 96557, 38568, -66802,
    -167364, -196026, -110542, 70895, 263124, 349171,
    245752, -34962, -367768, -563397, -469574, -73469,
    457784, 837606, 806742, 295241, -495627, -1157619,
    -1276658, -677117, 428527, 1491667, 1887619, 1267565,
    -188917, -1786587, -2630435, -2110898, -303235, 1965243,
    3472033, 3240157, 1136215, -1925577, -4349670, -4669359,
    -2400835, 1541289, 5166192, 6385865, 4184009, -663620,
    -5786373, -8343594, -6562941, -877163, 6033567, 10457595,
    9601846, 3273356, -5684401, -12599832, -13354150, -6749795,
    4456370, 14594759, 17875098, 11592966, -1976759, -16210449,
    -23254868, -18223779, -2295154, 17133888, 29697260, 27378963,
    9270526, -16897294, -37719891, -40608029, -20819434, 14638402,
    48765427, 61929133, 41896085, -8134069, -67774521, -105729442,
    -92217232, -12560776, 124060789, 285037037, 424508774, 499655028,
    486624646, 389586048, 239138376, 80745629, -42017265, -102587801,
    -99009328, -51485013, 8321123, 51158624, 61258857, 40346738,
    3769679, -28605418, -42095290, -33142559, -9330870, 15754031,
    29778487, 27376461, 11825214, -7622283, -20953848, -22356677,
    -12553588, 2315258, 14328848, 17880874, 12177026, 1084731,
    -9298773, -13909891, -11109997, -3116591, 5524918, 10455863,
    9647856, 4150008, -2777984, -7536027, -8012973, -4467120,
    874546, 5152643, 6372497, 4295270, 348211, -3285750,
    -4846199, -3819639, -1040478, 1893197, 3511605, 3187857,
    1339948, -914933, -2409251, -2512129, -1368896, 279524,
    1548951, 1871449, 1230842, 88657, -916997, -1314932,
    -1008258, -262729, 483747, 866424, 761953, 307944,
    -210913, -530048, -532245, -278106, 57917, 296135,
    341640, 213929, 13172, -146907, -198536, -143128,
    -34338, 61393, 101345, 81906, 29967, -19207,
    -42498, -37322, -16631, 3044, -2587, -24168,
    -41609, -38185, -4956, 48623, 93732, 95246,
    34339, -72228, -170858, -194674, -103639, 80696,
    270534, 348890, 235827, -51011, -381726, -566266,
    -456927, -49248, 481739, 846959, 792762, 261252,
    -533727, -1178270, -1264319, -632629, 485313, 1530025,
    1881979, 1213383, -268820, -1850589, -2639093, -2050142,
    -196627, 2064062, 3505467, 3179106, 1001099, -2069070,
    -4421394, -4618296, -2238320, 1739168, 5292706, 6359882,
    3999406, -924365, -5986887, -8363350, -6367196, -547649,
    6329542, 10550075, 9413168, 2873322, -6099009, -12799308,
    -13200028, -6283513, 5014084, 14944406, 17795218, 11073132,
    -2703416, -16765609, -23306212, -17675200, -1371170, 17969366,
    29964681, 26845767, 8114711, -18124862, -38341781, -40171967,
    -19382451, 16454188, 50009066, 61771076, 40095212, -10977980,
    -70337978, -106447231, -89950866, -7169962, 131508915, 292544929,
    429829588, 501115635, 483756994, 383305747, 231396086, 73796312,
    -46426484, -103785870, -97514758, -48653037, 10935522, 52435515,
    60885660, 38803748, 1982873, -29752070, -42156009, -32250110,
    -8051315, 16748394, 30042893, 26876757, 10902113, -8464396,
    -21311558, -22111901, -11897665, 3011200, 14716691, 17804106,
    11726220, 525122, -9677861, -13940867, -10816466, -2680415,
    5871433, 10550908, 9472630, 3822040, -3078599, -7663281,
    -7923711, -4230738, 1123616, 5289413, 6342539, 4133467,
    150725, -3416743, -4854105, -3715997, -890723, 2009097,
    3540792, 3127368, 1231649, -1011123, -2447574, -2481795,
    -1294590, 354892, 1588163, 1860621, 1182874, 32813,
    -952099, -1315408, -979511, -223669, 512285, 872318,
    746317, 282273, -232270, -537508, -524855, -262383,
    72659, 302950, 338911, 205064, 3842, -152083,
    -198048, -138612, -29009, 64743, 101641, 79884,
    27308, -21004, -42838, -36551, -15555, 3746,
    -3484, -25225, -42040, -37287, -2703, 51249,
    95044, 93787, 30000, -77639, -174178, -193048,
    -96512, 90516, 277684, 348155, 225484, -67173,
    -395344, -568439, -443566, -24722, 505313, 855320,
    777645, 226624, -571485, -1197605, -1250272, -586971,
    541947, 1566755, 1873917, 1157252, -348987, -1912732,
    -2644488, -1986367, -89019, 2160970, 3534718, 3113644,
    863825, -2210902, -4488026, -4561106, -2071968, 1936099,
    5413357, 6325761, 3808671, -1185511, -6181084, -8372738,
    -6162328, -215537, 6619293, 10629871, 9211625, 2467414,
    -6508336, -12983895, -13028512, -5806719, 5568702, 15277355,
    17692617, 10536433, -3430946, -17303087, -23328716, -17101168,
    -439729, 18787677, 30196369, 26275424, 6940752, -19338565,
    -38920358, -39682232, -17909356, 18265280, 51201747, 61534065,
    38224242, -13842810, -72848327, -107042641, -87529406, -1647769,
    139010264, 299998218, 434996858, 502369628, 480695741, 376905964,
    223641456, 66935276, -50688224, -104835325, -95921494, -45797396,
    13506096, 53633956, 60440592, 37226569, 208762, -30852601,
    -42163930, -31324130, -6770744, 17715207, 30268234, 26346858,
    9971240, -9290824, -21640621, -21841086, -11230790, 3699362,
    15084001, 17705629, 11263385, -31974, -10042766, -13954317,
    -10511127, -2243367, 6208674, 10632274, 9286606, 3491195,
    -3373641, -7780246, -7825096, -3990480, 1369799, 5418764,
    6304853, 3967503, -45720, -3542646, -4855900, -3608385,
    -740837, 2121716, 3565358, 3063384, 1122562, -1105370,
    -2482561, -2448575, -1219215, 429247, 1625083, 1847545,
    1133805, -22618, -985714, -1314226, -949779, -184671,
    539920, 877059, 729887, 256494, -253120, -544211,
    -516877, -246495, 87146, 309300, 335781, 196045,
    -5376, -156994, -197311, -133982, -23721, 67957,
    101799, 77791, 24662, -22737, -43111, -35746,
    -14486, 4422, -4403, -26272, -42422, -36317,
    -402, 53853, 96249, 92178, 25554, -83028,
    -177315, -191149, -89166, 100341, 284562, 346962,
    214734, -83427, -408602, -569908, -429503, 78,
    528470, 862672, 761399, 191396, -608851, -1215587,
    -1234522, -540192, 598355, 1601797, 1863423, 1099228,
    -429319, -1972923, -2646588, -1919631, 19461, 2255830,
    3559721, 3043824, 724552, -2350886, -4549449, -4497820,
    -1901964, 2131827, 5527959, 6283496, 3612007, -1446733,
    -6368683, -8371687, -5948543, 118769, 6902421, 10696810,
    8997396, 2056106, -6911839, -13153277, -12839716, -5319950,
    6119511, 15593095, 17567291, 9983441, -4158443, -17822107,
    -23322177, -16502244, 498058, 19587695, 30391802, 25668394,
    5749979, -20536802, -39454581, -39139006, -16401663, 20069419,
    52341537, 61217589, 36284653, -16725405, -75301895, -107513062,
    -84952626, 4003202, 146560104, 307391664, 440006771, 503416065,
    477443176, 370391345, 215879747, 60166495, -54801078, -105737531,
    -94232796, -42921725, 16030310, 54753339, 59924885, 35617419,
    -1550606, -31906036, -42119445, -30366001, -5490739, 18653465,
    30454488, 25787609, 9033794, -10100641, -21940799, -21544722,
    -10553854, 4378937, 15430440, 17585689, 10789164, -585880,
    -10393115, -13950324, -10194427, -1805996, 6536273, 10699938,
    9090079, 3157902, -3662775, -7886835, -7717309, -3746670,
    1612804, 5540577, 6259533, 3797613, -240883, -3663333,
    -4851622, -3496964, -591009, 2230937, 3585302, 2996009,
    1012830, -1197568, -2514189, -2412532, -1142872, 502503,
    1659682, 1832255, 1083705, -77569, -1017812, -1311403,
    -919111, -145786, 566625, 880649, 712691, 230641,
    -273443, -550157, -508327, -230465, 101361, 315184,
    332259, 186884, -14470, -161640, -196329, -129243,
    -18481, 71031, 101819, 75631, 22031, -24405,
    -43319, -34910, -13423, 5070, -5341, -27307,
    -42750, -35275, 1944, 56430, 97346, 90420,
    21005, -88386, -180265, -188974, -81608, 110160,
    291155, 345308, 203585, -99753, -421478, -570662,
    -414747, 25124, 551177, 868995, 744035, 155607,
    -645773, -1232184, -1217075, -492341, 654464, 1635092,
    1850493, 1039371, -509713, -2031071, -2645366, -1849998,
    128681, 2348509, 3580415, 2969705, 583443, -2488832,
    -4605554, -4428481, -1728500, 2326099, 5636329, 6233088,
    3409626, -1707701, -6549409, -8360136, -5726056, 454863,
    7178534, 10750735, 8770677, 1639884, -7308981, -13307155,
    -12633780, -4823758, 6665801, 15891133, 17419266, 9414752,
    -4885002, -18321913, -23286430, -15879022, 1441063, 20368310,
    30550503, 25025183, 4543749, -21717978, -39943459, -38542541,
    -14860938, 21864334, 53426548, 60821223, 34278017, -19622551,
    -77695024, -107855969, -82220429, 9780221, 154153631, 314720055,
    444855625, 504254161, 474001730, 363766611, 208116196, 53493847,
    -58763775, -106493974, -92451977, -40029637, 18505709, 55793154,
    59339843, 33978537, -3293212, -32911466, -42023006, -29377131,
    -4212872, 19562207, 30601681, 25199891, 8090975, -10892946,
    -22211897, -21223328, -9867757, 5049131, 15755697, 17444558,
    10304212, -1135924, -10728552, -13928991, -9866825, -1368848,
    6853878, 10753892, 8883354, 2822590, -3945673, -7982977,
    -7600536, -3499633, 1852346, 5654746, 6206682, 3624032,
    -434529, -3778688, -4841315, -3381897, -441425, 2336643,
    3600631, 2925350, 902594, -1287617, -2542444, -2373733,
    -1065664, 574576, 1691934, 1814786, 1032645, -131976,
    -1048364, -1306954, -887551, -107061, 592375, 883096,
    694758, 204748, -293218, -555345, -499222, -214316,
    115290, 320599, 328355, 177597, -23430, -166016,
    -195107, -124404, -13294, 73964, 101705, 73408,
    19419, -26005, -43461, -34043, -12368, 5690,
    -6298, -28327, -43026, -34162, 4334, 58978,
    98330, 88513, 16359, -93707, -183019, -186523,
    -73846, 119960, 297451, 343188, 192046, -116131,
    -433952, -570694, -399312, 50385, 573401, 874270,
    725564, 119299, -682201, -1247360, -1197938, -443470,
    710200, 1666584, 1835123, 977742, -590071, -2087088,
    -2640801, -1777535, 238508, 2438874, 3596745, 2891351,
    440663, -2624553, -4656233, -4353136, -1551773, 2518660,
    5738293, 6174553, 3201746, -1968088, -6722993, -8338038,
    -5495095, 792334, 7447243, 10791504, 8531681, 1219241,
    -7699227, -13445250, -12410864, -4318710, 7206864, 16170996,
    17248598, 8830985, -5609709, -18801767, -23221343, -15232129,
    2388144, 21128426, 30672033, 24346347, 3323452, -22880510,
    -40386048, -37893150, -13288800, 23647745, 54454939, 60344633,
    32205999, -22530983, -80024073, -108068933, -79332854, 15680437,
    161785983, 321978206, 449539832, 504883285, 470373971, 357036549,
    200356019, 46921105, -62575183, -107106252, -90582401, -37124718,
    20929919, 56752988, 58686838, 32312174, -5017077, -33868043,
    -41875125, -28358958, -2938697, 20440511, 30709889, 24584610,
    7143982, -11666867, -22453752, -20877449, -9173403, 5709166,
    16059491, 17282532, 9809192, -1681444, -11048746, -13890443,
    -9528789, -932468, 7161150, 10794148, 8666747, 2485689,
    -4222020, -8068610, -7474976, -3249697, 2088148, 5761176,
    6146413, 3447001, -626425, -3888598, -4825031, -3263353,
    -292272, 2438726, 3611356, 2851518, 791996, -1375418,
    -2567314, -2332245, -987695, 645384, 1721817, 1795178,
    980697, -185774, -1077346, -1300901, -855149, -68545,
    617145, 884407, 676118, 178848, -312425, -559777,
    -489580, -198069, 128916, 325543, 324077, 168196,
    -32247, -170121, -193650, -119473, -8168, 76754,
    101458, 71126, 16830, -27538, -43540, -33149,
    -11324, 6282, -7273, -29332, -43245, -32978,
    6763, 61492, 99199, 86456, 11619, -98982,
    -185572, -183795, -65887, 129726, 303439, 340601,
    180130, -132541, -446003, -569995, -383209, 75832,
    595108, 878482, 706001, 82512, -718083, -1261086,
    -1177122, -393635, 765489, 1696220, 1817315, 914407,
    -670288, -2140887, -2632873, -1702314, 348809, 2526795,
    3608661, 2808832, 296382, -2757863, -4701390, -4271844,
    -1371984, 2709259, 5833683, 6107915, 2988597, -2227562,
    -6889177, -8305358, -5255902, 1130767, 7708171, 10818991,
    8280638, 794679, -8082049, -13567298, -12171151, -3805387,
    7741994, 16432229, 17055367, 8232781, -6331650, -19260952,
    -23126823, -14562227, 3338147, 21866969, 30755999, 23632487,
    2090502, -24022824, -40781452, -37191217, -11686920, 25417365,
    55424921, 59787575, 30070359, -25447383, -82285423, -108149615,
    -76290077, 21700872, 169452237, 329160967, 454055922, 505302964,
    466562605, 350206013, 192604402, 40451935, -66234307, -107576078,
    -88627483, -34210526, 23300651, 57632521, 57967310, 30620597,
    -6720259, -34774989, -41676374, -27312945, -1669757, 21287502,
    30779234, 23942702, 6194012, -12421557, -22666241, -20507660,
    -8471700, 6358281, 16341566, 17099930, 9304777, -2221788,
    -11353383, -13834824, -9180800, -497393, 7457763, 10820733,
    8440583, 2147629, -4491507, -8143691, -7340838, -2997191,
    2319935, 5859778, 6078845, 3266761, -816342, -3992960,
    -4802827, -3141502, -143734, 2537083, 3617496, 2774627,
    681179, -1460878, -2588793, -2288140, -909070, 714847,
    1749312, 1773473, 927935, -238900, -1104733, -1293263,
    -821951, -30283, 640913, 884590, 656802, 152973,
    -331045, -563455, -479418, -181746, 142227, 330016,
    319436, 158694, -40910, -173952, -191962, -114457,
    -3108, 79399, 101082, 68789, 14267, -29003,
    -43557, -32229, -10291, 6845, -8264, -30318,
    -43408, -31724, 9231, 63968, 99949, 84252,
    6791, -104204, -187918, -180790, -57739, 139446,
    309106, 337544, 167846, -148961, -457610, -568559,
    -366454, 101434, 616265, 881615, 685360, 45290,
    -753369, -1273330, -1154639, -342890, 820257, 1723947,
    1797072, 849432, -750262, -2192383, -2621568, -1624411,
    459446, 2612144, 3616117, 2722226, 150772, -2888579,
    -4740930, -4184667, -1189340, 2897642, 5922340, 6033208,
    2770416, -2485792, -7047707, -8262077, -5008729, 1469742,
    7960945, 10833085, 8017793, 366707, -8456928, -13673056,
    -11914845, -3284385, 8270488, 16674400, 16839687, 7620802,
    -7049907, -19698774, -23002808, -13870008, 4289910, 22582882,
    30802051, 22884255, 846338, -25143361, -41128826, -36437191,
    -10057017, 27170907, 56334756, 59149895, 27872945, -28368387,
    -84475479, -108095775, -73092406, 27838429, 177147417, 336263227,
    458400544, 505512882, 462570472, 343279916, 184866496, 34089894,
    -69740288, -107905275, -86590676, -31290585, 25615699, 58431533,
    57182760, 28906080, -8400859, -35631587, -41427380, -26240577,
    -407577, 22102345, 30809882, 23275130, 5242259, -13156200,
    -22849276, -20114560, -7763563, 6995734, 16601697, 16897097,
    8791646, -2756312, -11642173, -13762300, -8823347, -64158,
    7743408, 10833691, 8205201, 1808838, -4753839, -8208186,
    -7198339, -2742445, 2547444, 5950477, 6004109, 3083559,
    -1004054, -4091679, -4774769, -3016518, 4008, 2631614,
    3619073, 2694796, 570282, -1543904, -2606877, -2241494,
    -829891, 782888, 1774401, 1749714, 874430, -291292,
    -1130503, -1284065, -788008, 7677, 663658, 883655,
    636841, 127158, -349060, -566381, -468755, -165370,
    155208, 334016, 314442, 149107, -49410, -177509,
    -190050, -109365, 1880, 81899, 100578, 66402,
    11733, -30398, -43512, -31284, -9270, 7380,
];

pub static SRC_INT32_32_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_32_21_4535_5000",
    input_stride: 19,
    output_stride: 29,
    subfilter_count: 32,
    subfilter_length: 108,
    block_in: 21,
    block_out: 32,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_32_21_4535_5000_FIR),
};

static SRC_INT32_32_21_4535_5000_FIR: [i32; 3456] = [
    -34031, 57230, -85688, 118286, -152957, 186551,
    -214728, 231931, -231423, 205420, -145335, 42124,
    113255, -329277, 613184, -970261, 1403048, -1910550,
    2487469, -3123498, 3802741, -4503277, 5196937, -5849313,
    6420040, -6863371, 7129051, -7163490, 6911215, -6316572,
    5325628, -3888210, 1960021, 495262, -3503994, 7080753,
    -11226817, 15929008, -21158994, 26873105, -33012739, 39505414,
    -46266508, 53201795, -60210869, 67191760, -74047287, 80694485,
    -87080283, 93211930, -99227920, 105604589, -113977626, 132953752,
    2046877492, 66623527, -81958202, 85497640, -85405840, 83391469,
    -80087015, 75825275, -70832328, 65289843, -59357967, 53183855,
    -46904293, 40645755, -34523362, 28639493, -23082428, 17925255,
    -13225163, 9023184, -5344402, 2198621, 418556, -2524279,
    4146723, -5323142, 6097807, -6519899, 6641435, -6515321,
    6193572, -5725754, 5157704, -4530523, 3879874, -3235565,
    2621414, -2055354, 1549762, -1111950, 744797, -447459,
    216125, -44776, -74089, 148788, -187872, 199640,
    -191759, 170995, -143038, 112434, -82583, 55817,
    -34243, 58159, -88093, 123200, -161698, 200715,
    -236159, 262651, -273540, 260992, -216203, 129707,
    8192, -206873, 474753, -818553, 1242503, -1747510,
    2330350, -2982890, 3691418, -4436112, 5190695, -5922317,
    6591705, -7153597, 7557481, -7748647, 7669523, -7261286,
    6465691, -5227076, 3494454, -1223626, -1620779, 5063444,
    -9116775, 13779684, -19036865, 24858647, -31201551, 38009690,
    -45217174, 52751826, -60540695, 68518322, -76639691, 84902116,
    -93386122, 102341758, -112400587, 125211224, -146016981, 202440979,
    2040898072, 3696883, -50219132, 65071072, -71063373, 72974278,
    -72474686, 70343388, -67028413, 62833937, -57993513, 52701634,
    -47127891, 41423206, -35722247, 30144021, -24791660, 19751974,
    -15095072, 10874243, -7126194, 3871661, -1116419, -1147377,
    2939547, -4290014, 5236797, -5823917, 6099327, -6112923,
    5914700, -5553118, 5073704, -4517942, 3922433, -3318361,
    2731223, -2180826, 1681495, -1242482, 868511, -560431,
    315925, -130242, -3093, 91608, -143290, 166084,
    -167479, 154209, -132050, 105714, -78821, 53946,
    -34140, 58580, -89759, 127110, -169159, 213337,
    -255834, 291502, -313827, 314996, -286058, 217203,
    -98160, -81284, 330656, -658067, 1069409, -1567501,
    2151233, -2814727, 3546592, -4329287, 5138663, -5943725,
    6706634, -7383007, 7922515, -8269795, 8365665, -8148628,
    7556615, -6528929, 5008306, -2943023, 288957, 2988515,
    -6912870, 11495189, -16733399, 22612182, -29103686, 36169265,
    -43762559, 51834399, -60340420, 69253030, -78581086, 88404557,
    -98941372, 110691791, -124798300, 144137250, -177807771, 274815913,
    2028970707, -55603534, -19011117, 44504513, -56331904, 62058144,
    -64316236, 64302539, -62673944, 59850042, -56133392, 51762776,
    -46938294, 41833478, -36601019, 31375272, -26273152, 21394300,
    -16821030, 12618343, -8834175, 5499958, -2631530, 230373,
    1714845, -3226497, 4336047, -5082005, 5507866, -5660100,
    5586266, -5333299, 4946034, -4465973, 3930341, -3371418,
    2816156, -2286049, 1797240, -1360826, 983325, -667260,
    411815, -213539, 67032, 34388, -98084, 131578,
    -142122, 136362, -120112, 98206, -74453, 51648,
    -33712, 58477, -90651, 129960, -175247, 224275,
    -273550, 318197, -351901, 366931, -354266, 303834,
    -204871, 46411, 182110, -490133, 885174, -1371953,
    1951497, -2620251, 3369254, -4183412, 5040930, -5912940,
    6763376, -7549124, 8220474, -8721886, 8993074, -8970389,
    8588461, -7782061, 6488119, -4647804, 2208585, 873842,
    -4633878, 9094732, -14267660, 20151920, -26735643, 33997919,
    -41912535, 50454072, -59607611, 69384427, -79848456, 91163916,
    -103688693, 118178436, -136300125, 162204248, -209075172, 349787922,
    2011158154, -111080063, 11426426, 23975107, -41344041, 50743854,
    -55688493, 57760748, -57811757, 56368531, -53797677, 50378847,
    -46340091, 41875514, -37154151, 32324295, -27515445, 22839075,
    -18388882, 14240930, -10453895, 7069569, -4113661, 1596922,
    483443, -2142096, 3403710, -4300979, 4872585, -5161191,
    5211520, -5068592, 4776163, -4375399, 3903825, -3394535,
    2875695, -2370293, 1896139, -1466070, 1088328, -767077,
    503001, -293965, 135682, -22368, -52658, 96440,
    -115929, 117632, -107346, 89993, -69533, 48955,
    -32952, 57834, -90743, 131701, -179883, 233403,
    -289116, 342465, -387389, 416307, -420202, 388822,
    -311001, 175105, 30380, -316159, 691317, -1162447,
    1732719, -2400946, 3160691, -3999451, 4897987, -5829822,
    6760985, -7650010, 8448240, -9100441, 9545742, -9718884,
    9551745, -8975117, 7920646, -6322873, 4121283, -1262231,
    -2299355, 6598667, -11660263, 17498068, -24116408, 31512436,
    -39680518, 48619498, -58344486, 68906250, -80424472, 93148410,
    -107577122, 124724459, -146790831, 179237171, -239539838, 427046567,
    1987554052, -162560908, 40866812, 3656129, -26232493, 39134306,
    -46671479, 50779797, -52488707, 52423851, -51010425, 48565205,
    -45341397, 41551474, -37378996, 32984658, -28509242, 24074950,
    -19785947, 15728607, -11971769, 8567156, -5550074, 2940395,
    -743847, -1046439, 2448162, -3487949, 4199360, -4620902,
    4794095, -4761664, 4565916, -4247333, 3843412, -3387775,
    2909552, -2433020, 1977492, -1557425, 1182704, -859085,
    588736, -370848, 202274, -78169, -7416, 60988,
    -89145, 98198, -93883, 81163, -64117, 45903,
    -31855, 56643, -90015, 132294, -182995, 240605,
    -302357, 364054, -419940, 462650, -483250, 471393,
    -415601, 303671, -123223, -137623, 489458, -940702,
    1496656, -2158527, 2922473, -3778709, 4710728, -5694692,
    6699027, -7684287, 8603294, -9401601, 10018278, -10387015,
    10437524, -10097197, 9292970, -7953300, 6010179, -3401055,
    70529, 4028323, -8933206, 14672671, -21267303, 28732477,
    -37083372, 46343381, -56557930, 67817520, -80297697, 94332701,
    -110562593, 130259738, -156161953, 195065842, -268919786, 506263273,
    1958282340, -209900837, 69097425, -16284341, -11128951, 27333603,
    -37347683, 43424662, -46755231, 48054191, -47799438, 46340838,
    -43953763, 40866698, -37275789, 33352493, -29247477, 25092478,
    -21001115, 17069243, -13375189, 9980100, -6928514, 4249203,
    -1956321, 50818, 1477921, -2650252, 3494355, -4044270,
    4337969, -4415531, 4317460, -4083206, 3749920, -3351460,
    2917663, -2473882, 2040758, -1634232, 1265738, -942565,
    668333, -443557, 266250, -132537, 37248, 25539,
    -62014, 78244, -79854, 71807, -58267, 42530,
    -30419, 54898, -88455, 131709, -184528, 245785,
    -313119, 382730, -449222, 505508, -542813, 550786,
    -517728, 430966, -277359, 43942, 281302, -708561,
    1245235, -1894930, 2656450, -3522827, 4480448, -5508332,
    6577593, -7651155, 8683737, -9622158, 10405957, -10968347,
    11237473, -11137949, 10592616, -9524446, 7858503, -5523834,
    2455159, 1405817, -6109679, 11699426, -18211813, 25680423,
    -34141287, 43642395, -54259476, 66122603, -79462738, 94698182,
    -112608390, 134721951, -164312823, 209526433, -296932314, 587093136,
    1923496480, -252981702, 95920931, -35684675, 3836991, 15446158,
    -27801331, 35762921, -40664875, 43301117, -44195987, 43728171,
    -42192051, 39829639, -36847626, 33426511, -29725362, 25884177,
    -22024940, 18252069, -14652631, 11296602, -8237311, 5512133,
    -3143481, 1140069, 501573, -1795393, 2763969, -3436608,
    3847428, -4033531, 4033278, -3884755, 3624452, -3286169,
    2900195, -2492730, 2085561, -1695968, 1336824, -1016878,
    741164, -511506, 327082, -185015, 80950, -9596,
    -34782, 57956, -65394, 62021, -52045, 38877,
    -28649, 52602, -86056, 129926, -184437, 248860,
    -321264, 398284, -474929, 544454, -598320, 626256,
    -616447, 555851, -430671, 226961, 68628, -467977,
    980536, -1612296, 2364732, -3233770, 4208829, -5271982,
    6397297, -7550401, 8688316, -9759593, 10704771, -11457164,
    11943970, -12087670, 11807668, -11022100, 9649731, -7611795,
    4833661, -1246129, -3213876, 8603489, -14975395, 22381201,
    -30877630, 40537066, -51465234, 63831210, -77920351, 94233210,
    -113685556, 138057226, -171151542, 222462928, -323295963, 669176845,
    1883378492, -291712782, 121156361, -54390891, 18538893, 3575797,
    -18117644, 27864146, -34273810, 38209187, -40234520, 40752848,
    -40074275, 38451760, -36100421, 33207998, -29940416, 26444587,
    -22849707, 19267766, -15793744, 12505783, -9465483, 6718451,
    -4295118, 2211846, -472301, -930968, 2014775, -2803463,
    3327028, -3619287, 3716143, -3654002, 3468379, -3192730,
    2857532, -2489606, 2111690, -1742244, 1395464, -1081475,
    806670, -574156, 384276, -235167, 123319, -44112,
    -7691, 37518, -50641, 51900, -45517, 34985,
    -26547, 49759, -82820, 126938, -182692, 249766,
    -326678, 410529, -496780, 579088, -649225, 697089,
    -710845, 677193, -581793, 409830, -146728, -220996,
    704777, -1312951, 2049672, -2913813, 3897933, -4987334,
    6159276, -7382407, 8616435, -9812101, 10911464, -11848524,
    12550162, -12937394, 12926874, -12432605, 11367734, -9646345,
    7185076, -3904386, -270783, 5411259, -11585268, 18862086,
    -27318756, 37051626, -48195792, 60958364, -75677487, 92933271,
    -113773228, 140220708, -176595898, 233728548, -347732507, 752142720,
    1838137822, -326030937, 144640053, -72257755, 32854482, -8175114,
    -8382094, 19799281, -27640316, 32825539, -35952335, 37443486,
    -37621430, 36747422, -35042829, 32700785, -29892465, 26770306,
    -23469491, 20108533, -16789439, 13597774, -10602827, 7857990,
    -5401403, 3256898, -1435202, -64605, 1253463, -2150566,
    2781549, -3176677, 3369099, -3393235, 3283329, -3072210,
    2790280, -2464746, 2119098, -1772814, 1441279, -1135899,
    864361, -631021, 437376, -282584, 164002, -77715,
    19025, 17114, -35730, 41542, -38749, 30896,
    -24125, 46382, -78757, 122745, -179278, 248458,
    -329269, 419306, -514527, 609047, -695020, 762600,
    -800035, 793878, -729365, 590930, -362890, 30260,
    420291, -999391, 1713851, -2565522, 3550185, -4656517,
    5865188, -7148152, 8468170, -9778612, 11023572, -12138311,
    13050034, -13678973, 13939755, -13742981, 12996924, -11609243,
    9488549, -6545620, 2694035, 2150159, -8070188, 15152469,
    -23493804, 33213821, -44476067, 57524306, -72747292, 90801100,
    -112858914, 141177069, -180574223, 243187135, -369968938, 835608840,
    1788010029, -355900576, 166226464, -89149804, 46666611, -19706520,
    1320332, 11640023, -20824264, 27199462, -31389231, 33831399,
    -34857282, 34733737, -33686160, 31911197, -29583638, 26860001,
    -23880194, 20768152, -17631955, 14563795, -11639999, 8921232,
    -6452973, 4266270, -2378788, 796104, 486778, -1483773,
    2215956, -2709796, 2995422, -3104985, 3071172, -2925905,
    2699252, -2418575, 2107906, -1787569, 1474002, -1179783,
    913821, -681674, 485970, -326887, 202666, -110123,
    45134, -3076, -20797, 31044, -31808, 26654,
    -21393, 42486, -73885, 117360, -174194, 244909,
    -328968, 424487, -527954, 634001, -735232, 822145,
    -883167, 904822, -872042, 768642, -577953, 283611,
    129511, -674258, 1360055, -2191734, 3168354, -4282085,
    5517195, -6849205, 8244270, -9658807, 11039443, -12323275,
    13438465, -14305158, 14836695, -14941043, 14522390, -13482761,
    11723511, -9146496, 5654652, -1151602, -4460203, 11283622,
    -19434458, 29054702, -40335126, 53554371, -69149047, 87846727,
    -110938698, 140900943, -183026169, 250714470, -389739456, 919185256,
    1733255319, -381313456, 185788821, -104942268, 59864172, -30921504,
    10905851, 3458191, -13886579, 21381946, -26587152, 29950312,
    -31808146, 32430394, -32044257, 30847985, -29018327, 26714412,
    -24079576, 21242026, -18314920, 15396225, -12568592, 9899392,
    -7441003, 5231385, -3294943, 1643675, -278533, -809021,
    1635349, -2222920, 2598598, -2792004, 2833997, -2755323,
    2585464, -2351697, 2078395, -1786543, 1493487, -1212862,
    954714, -725746, 529688, -367729, 239000, -141070,
    70418, -22879, -5974, 20504, -24760, 22302,
    -18368, 38094, -68230, 110808, -167455, 239112,
    -325733, 425970, -536882, 653663, -769435, 875123,
    -959436, 1008981, -1008513, 941360, -790007, 536839,
    -165051, -340320, 991253, -1795535, 2755534, -3866999,
    5117952, -6487718, 7946154, -9453125, 10958266, -12401067,
    13711282, -14809670, 15609036, -16015516, 15930040, -15249840,
    13869862, -11683880, 8585009, -4465268, -786399, 7288436,
    -15174692, 24608372, -35805959, 49078803, -64908061, 84087466,
    -108017373, 139377274, -183903403, 256199530, -406787441, 1002476271,
    1674156927, -402288290, 203219641, -119521892, 72342938, -41727072,
    20292598, -4674891, -6888709, 15425235, -21589795, 25836046,
    -28502636, 29859481, -30133360, 29522232, -28203133, 26336328,
    -24067253, 21527211, -18833400, 16088661, -13381207, 10784488,
    -8357288, 6144107, -4175850, 2470789, -1035788, -132271,
    1044923, -1720466, 2182287, -2457237, 2574093, -2562173,
    2450120, -2264897, 2031003, -1769907, 1499703, -1234965,
    986779, -762931, 568210, -404797, 272718, -170305,
    94667, -42125, 8609, 10015, -17672, 17883,
    -15069, 33234, -61824, 103123, -159090, 231082,
    -319544, 423688, -541168, 667788, -797250, 920986,
    -1028088, 1105356, -1137503, 1107507, -997148, 787706,
    -460830, -448, 610572, -1380235, 2315114, -3414597,
    4670586, -6066409, 7575909, -9162764, 10780075, -12370264,
    13865300, -15187254, 16249159, -16956140, 17206726, -16894247,
    15908153, -14135045, 11459145, -7761786, 2919367, 3201136,
    -10750482, 19911714, -30925227, 44132538, -60055499, 79547837,
    -104108500, 136601592, -183170219, 259545665, -420867379, 1085082773,
    1611019351, -418870193, 218431084, -132787653, 84006336, -52034896,
    29401303, -12689009, 107916, 9382354, -16442225, 21526192,
    -24971399, 27045264, -27971948, 27947238, -27146801, 25730553,
    -23844696, 21622432, -19183929, 16635964, -14071506, 11569405,
    -9194303, 6996820, -5014053, 3270360, -1778425, 540543,
    449918, -1206952, 1750289, -2103795, 2293933, -2348346,
    2294603, -2159122, 1966321, -1737964, 1492738, -1246020,
    1009839, -792986, 601263, -437819, 303561, -197598,
    117684, -60656, 22828, -330, -10607, 13440,
    -11518, 27937, -54710, 94353, -149145, 220851,
    -310412, 417605, -540710, 676177, -818349, 959244,
    -1088427, 1193011, -1257793, 1265546, -1197497, 1033973,
    -755224, 342410, 221268, -949340, 1850757, -2928578,
    4178674, -5588545, 7136271, -8789679, 10505761, -12230392,
    13898362, -15433742, 16750561, -17753762, 18340364, -18400725,
    17819757, -16477877, 14251418, -11012064, 6624737, -942999,
    -6199510, 15004086, -25732966, 38754933, -54628173, 74259433,
    -99234400, 132580196, -180804050, 260671680, -431746756, 1166604605,
    1544166473, -431129952, 231355172, -144651368, 94766151, -61762011,
    38155946, -20515651, 7042412, 3306647, -11190470, 17059772,
    -21246836, 24013970, -25580567, 26138395, -25860124, 24903847,
    -23415205, 21528083, -19364532, 17034299, -14634261, 12247950,
    -9945268, 7782482, -5802523, 4035594, -2500055, 1203566,
    -144426, -686957, 1306510, -1734926, 1996140, -2115898,
    2120459, -2035481, 1885087, -1691153, 1472793, -1246054,
    1023795, -815735, 628628, -466558, 331300, -222738,
    139286, -78321, 36565, -10442, -3630, 9015,
    -7741, 22240, -46934, 84553, -137678, 208474,
    -298370, 407719, -535444, 678680, -832462, 989465,
    -1139824, 1271075, -1368227, 1413998, -1389218, 1273422,
    -1045621, 685255, -173296, -506519, 1366366, -2412961,
    3646211, -5057916, 6630608, -8336564, 10137067, -11981932,
    13809358, -15546090, 17107914, -18400431, 19320053, -19755129,
    19587039, -18691068, 16936739, -14187217, 10297140, -5107947,
    -1560844, 9926997, -20272269, 32989466, -48668269, 68260714,
    -93426058, 127330248, -176795879, 259512825, -439207875, 1246642959,
    1473939549, -439163138, 241943847, -155038188, 104543148, -70831457,
    46484374, -28088581, 13854967, -2748685, -5881111, 12476888,
    -17362808, 20793540, -22981629, 24113034, -24355834, 23864860,
    -22783864, 21246211, -19374734, 17281158, -15065398, 12814905,
    -10604203, 8494686, -6534718, 4760046, -3194521, 1851073,
    -732916, -165082, 854929, -1353988, 1683475, -1867027,
    1929385, -1895224, 1788176, -1630037, 1440182, -1235189,
    1028633, -831068, 650139, -490821, 355736, -245537,
    159308, -94978, 49706, -20236, 3199, 4646,
    -3767, 16187, -38554, 73792, -124767, 194025,
    -283480, 394063, -525351, 675197, -839377, 1011287,
    -1181722, 1338750, -1467727, 1551456, -1570534, 1503874,
    -1329421, 1025060, -569684, -55583, 866050, -1872062,
    3077580, -4478804, 6062892, -7806841, 9676580, -11626328,
    13598245, -15522414, 17317125, -18889472, 20136176, -20944561,
    21193524, -20754311, 19490795, -17258831, 13904070, -9257249,
    3125391, 4723759, -14588927, 26883389, -42223030, 61596747,
    -86722962, 120879780, -171150551, 256021675, -443049611, 1324802770,
    1400695110, -443089067, 250168887, -163886971, 113267608, -79172862,
    54318882, -35344393, 20487347, -8731054, -560879, 7818365,
    -13354328, 17413375, -20199211, 21890265, -22648486, 22624038,
    -21957490, 20780490, -19215550, 17375375, -15362016, 13266059,
    -11165973, 9127715, -7204630, 5437675, -3855952, 2477518,
    -1310451, 354094, 399560, -964413, 1358800, -1604059,
    1723208, -1739740, 1676592, -1555296, 1395327, -1213642,
    1024416, -838941, 665682, -510455, 376702, -265831,
    177598, -110498, 62147, -29632, 9823, 374,
    374, 9823, -29632, 62147, -110498, 177598,
    -265831, 376702, -510455, 665682, -838941, 1024416,
    -1213642, 1395327, -1555296, 1676592, -1739740, 1723208,
    -1604059, 1358800, -964413, 399560, 354094, -1310451,
    2477518, -3855952, 5437675, -7204630, 9127715, -11165973,
    13266059, -15362016, 17375375, -19215550, 20780490, -21957490,
    22624038, -22648486, 21890265, -20199211, 17413375, -13354328,
    7818365, -560879, -8731054, 20487347, -35344393, 54318882,
    -79172862, 113267608, -163886971, 250168887, -443089067, 1400695110,
    1324802770, -443049611, 256021675, -171150551, 120879780, -86722962,
    61596747, -42223030, 26883389, -14588927, 4723759, 3125391,
    -9257249, 13904070, -17258831, 19490795, -20754311, 21193524,
    -20944561, 20136176, -18889472, 17317125, -15522414, 13598245,
    -11626328, 9676580, -7806841, 6062892, -4478804, 3077580,
    -1872062, 866050, -55583, -569684, 1025060, -1329421,
    1503874, -1570534, 1551456, -1467727, 1338750, -1181722,
    1011287, -839377, 675197, -525351, 394063, -283480,
    194025, -124767, 73792, -38554, 16187, -3767,
    4646, 3199, -20236, 49706, -94978, 159308,
    -245537, 355736, -490821, 650139, -831068, 1028633,
    -1235189, 1440182, -1630037, 1788176, -1895224, 1929385,
    -1867027, 1683475, -1353988, 854929, -165082, -732916,
    1851073, -3194521, 4760046, -6534718, 8494686, -10604203,
    12814905, -15065398, 17281158, -19374734, 21246211, -22783864,
    23864860, -24355834, 24113034, -22981629, 20793540, -17362808,
    12476888, -5881111, -2748685, 13854967, -28088581, 46484374,
    -70831457, 104543148, -155038188, 241943847, -439163138, 1473939549,
    1246642959, -439207875, 259512825, -176795879, 127330248, -93426058,
    68260714, -48668269, 32989466, -20272269, 9926997, -1560844,
    -5107947, 10297140, -14187217, 16936739, -18691068, 19587039,
    -19755129, 19320053, -18400431, 17107914, -15546090, 13809358,
    -11981932, 10137067, -8336564, 6630608, -5057916, 3646211,
    -2412961, 1366366, -506519, -173296, 685255, -1045621,
    1273422, -1389218, 1413998, -1368227, 1271075, -1139824,
    989465, -832462, 678680, -535444, 407719, -298370,
    208474, -137678, 84553, -46934, 22240, -7741,
    9015, -3630, -10442, 36565, -78321, 139286,
    -222738, 331300, -466558, 628628, -815735, 1023795,
    -1246054, 1472793, -1691153, 1885087, -2035481, 2120459,
    -2115898, 1996140, -1734926, 1306510, -686957, -144426,
    1203566, -2500055, 4035594, -5802523, 7782482, -9945268,
    12247950, -14634261, 17034299, -19364532, 21528083, -23415205,
    24903847, -25860124, 26138395, -25580567, 24013970, -21246836,
    17059772, -11190470, 3306647, 7042412, -20515651, 38155946,
    -61762011, 94766151, -144651368, 231355172, -431129952, 1544166473,
    1166604605, -431746756, 260671680, -180804050, 132580196, -99234400,
    74259433, -54628173, 38754933, -25732966, 15004086, -6199510,
    -942999, 6624737, -11012064, 14251418, -16477877, 17819757,
    -18400725, 18340364, -17753762, 16750561, -15433742, 13898362,
    -12230392, 10505761, -8789679, 7136271, -5588545, 4178674,
    -2928578, 1850757, -949340, 221268, 342410, -755224,
    1033973, -1197497, 1265546, -1257793, 1193011, -1088427,
    959244, -818349, 676177, -540710, 417605, -310412,
    220851, -149145, 94353, -54710, 27937, -11518,
    13440, -10607, -330, 22828, -60656, 117684,
    -197598, 303561, -437819, 601263, -792986, 1009839,
    -1246020, 1492738, -1737964, 1966321, -2159122, 2294603,
    -2348346, 2293933, -2103795, 1750289, -1206952, 449918,
    540543, -1778425, 3270360, -5014053, 6996820, -9194303,
    11569405, -14071506, 16635964, -19183929, 21622432, -23844696,
    25730553, -27146801, 27947238, -27971948, 27045264, -24971399,
    21526192, -16442225, 9382354, 107916, -12689009, 29401303,
    -52034896, 84006336, -132787653, 218431084, -418870193, 1611019351,
    1085082773, -420867379, 259545665, -183170219, 136601592, -104108500,
    79547837, -60055499, 44132538, -30925227, 19911714, -10750482,
    3201136, 2919367, -7761786, 11459145, -14135045, 15908153,
    -16894247, 17206726, -16956140, 16249159, -15187254, 13865300,
    -12370264, 10780075, -9162764, 7575909, -6066409, 4670586,
    -3414597, 2315114, -1380235, 610572, -448, -460830,
    787706, -997148, 1107507, -1137503, 1105356, -1028088,
    920986, -797250, 667788, -541168, 423688, -319544,
    231082, -159090, 103123, -61824, 33234, -15069,
    17883, -17672, 10015, 8609, -42125, 94667,
    -170305, 272718, -404797, 568210, -762931, 986779,
    -1234965, 1499703, -1769907, 2031003, -2264897, 2450120,
    -2562173, 2574093, -2457237, 2182287, -1720466, 1044923,
    -132271, -1035788, 2470789, -4175850, 6144107, -8357288,
    10784488, -13381207, 16088661, -18833400, 21527211, -24067253,
    26336328, -28203133, 29522232, -30133360, 29859481, -28502636,
    25836046, -21589795, 15425235, -6888709, -4674891, 20292598,
    -41727072, 72342938, -119521892, 203219641, -402288290, 1674156927,
    1002476271, -406787441, 256199530, -183903403, 139377274, -108017373,
    84087466, -64908061, 49078803, -35805959, 24608372, -15174692,
    7288436, -786399, -4465268, 8585009, -11683880, 13869862,
    -15249840, 15930040, -16015516, 15609036, -14809670, 13711282,
    -12401067, 10958266, -9453125, 7946154, -6487718, 5117952,
    -3866999, 2755534, -1795535, 991253, -340320, -165051,
    536839, -790007, 941360, -1008513, 1008981, -959436,
    875123, -769435, 653663, -536882, 425970, -325733,
    239112, -167455, 110808, -68230, 38094, -18368,
    22302, -24760, 20504, -5974, -22879, 70418,
    -141070, 239000, -367729, 529688, -725746, 954714,
    -1212862, 1493487, -1786543, 2078395, -2351697, 2585464,
    -2755323, 2833997, -2792004, 2598598, -2222920, 1635349,
    -809021, -278533, 1643675, -3294943, 5231385, -7441003,
    9899392, -12568592, 15396225, -18314920, 21242026, -24079576,
    26714412, -29018327, 30847985, -32044257, 32430394, -31808146,
    29950312, -26587152, 21381946, -13886579, 3458191, 10905851,
    -30921504, 59864172, -104942268, 185788821, -381313456, 1733255319,
    919185256, -389739456, 250714470, -183026169, 140900943, -110938698,
    87846727, -69149047, 53554371, -40335126, 29054702, -19434458,
    11283622, -4460203, -1151602, 5654652, -9146496, 11723511,
    -13482761, 14522390, -14941043, 14836695, -14305158, 13438465,
    -12323275, 11039443, -9658807, 8244270, -6849205, 5517195,
    -4282085, 3168354, -2191734, 1360055, -674258, 129511,
    283611, -577953, 768642, -872042, 904822, -883167,
    822145, -735232, 634001, -527954, 424487, -328968,
    244909, -174194, 117360, -73885, 42486, -21393,
    26654, -31808, 31044, -20797, -3076, 45134,
    -110123, 202666, -326887, 485970, -681674, 913821,
    -1179783, 1474002, -1787569, 2107906, -2418575, 2699252,
    -2925905, 3071172, -3104985, 2995422, -2709796, 2215956,
    -1483773, 486778, 796104, -2378788, 4266270, -6452973,
    8921232, -11639999, 14563795, -17631955, 20768152, -23880194,
    26860001, -29583638, 31911197, -33686160, 34733737, -34857282,
    33831399, -31389231, 27199462, -20824264, 11640023, 1320332,
    -19706520, 46666611, -89149804, 166226464, -355900576, 1788010029,
    835608840, -369968938, 243187135, -180574223, 141177069, -112858914,
    90801100, -72747292, 57524306, -44476067, 33213821, -23493804,
    15152469, -8070188, 2150159, 2694035, -6545620, 9488549,
    -11609243, 12996924, -13742981, 13939755, -13678973, 13050034,
    -12138311, 11023572, -9778612, 8468170, -7148152, 5865188,
    -4656517, 3550185, -2565522, 1713851, -999391, 420291,
    30260, -362890, 590930, -729365, 793878, -800035,
    762600, -695020, 609047, -514527, 419306, -329269,
    248458, -179278, 122745, -78757, 46382, -24125,
    30896, -38749, 41542, -35730, 17114, 19025,
    -77715, 164002, -282584, 437376, -631021, 864361,
    -1135899, 1441279, -1772814, 2119098, -2464746, 2790280,
    -3072210, 3283329, -3393235, 3369099, -3176677, 2781549,
    -2150566, 1253463, -64605, -1435202, 3256898, -5401403,
    7857990, -10602827, 13597774, -16789439, 20108533, -23469491,
    26770306, -29892465, 32700785, -35042829, 36747422, -37621430,
    37443486, -35952335, 32825539, -27640316, 19799281, -8382094,
    -8175114, 32854482, -72257755, 144640053, -326030937, 1838137822,
    752142720, -347732507, 233728548, -176595898, 140220708, -113773228,
    92933271, -75677487, 60958364, -48195792, 37051626, -27318756,
    18862086, -11585268, 5411259, -270783, -3904386, 7185076,
    -9646345, 11367734, -12432605, 12926874, -12937394, 12550162,
    -11848524, 10911464, -9812101, 8616435, -7382407, 6159276,
    -4987334, 3897933, -2913813, 2049672, -1312951, 704777,
    -220996, -146728, 409830, -581793, 677193, -710845,
    697089, -649225, 579088, -496780, 410529, -326678,
    249766, -182692, 126938, -82820, 49759, -26547,
    34985, -45517, 51900, -50641, 37518, -7691,
    -44112, 123319, -235167, 384276, -574156, 806670,
    -1081475, 1395464, -1742244, 2111690, -2489606, 2857532,
    -3192730, 3468379, -3654002, 3716143, -3619287, 3327028,
    -2803463, 2014775, -930968, -472301, 2211846, -4295118,
    6718451, -9465483, 12505783, -15793744, 19267766, -22849707,
    26444587, -29940416, 33207998, -36100421, 38451760, -40074275,
    40752848, -40234520, 38209187, -34273810, 27864146, -18117644,
    3575797, 18538893, -54390891, 121156361, -291712782, 1883378492,
    669176845, -323295963, 222462928, -171151542, 138057226, -113685556,
    94233210, -77920351, 63831210, -51465234, 40537066, -30877630,
    22381201, -14975395, 8603489, -3213876, -1246129, 4833661,
    -7611795, 9649731, -11022100, 11807668, -12087670, 11943970,
    -11457164, 10704771, -9759593, 8688316, -7550401, 6397297,
    -5271982, 4208829, -3233770, 2364732, -1612296, 980536,
    -467977, 68628, 226961, -430671, 555851, -616447,
    626256, -598320, 544454, -474929, 398284, -321264,
    248860, -184437, 129926, -86056, 52602, -28649,
    38877, -52045, 62021, -65394, 57956, -34782,
    -9596, 80950, -185015, 327082, -511506, 741164,
    -1016878, 1336824, -1695968, 2085561, -2492730, 2900195,
    -3286169, 3624452, -3884755, 4033278, -4033531, 3847428,
    -3436608, 2763969, -1795393, 501573, 1140069, -3143481,
    5512133, -8237311, 11296602, -14652631, 18252069, -22024940,
    25884177, -29725362, 33426511, -36847626, 39829639, -42192051,
    43728171, -44195987, 43301117, -40664875, 35762921, -27801331,
    15446158, 3836991, -35684675, 95920931, -252981702, 1923496480,
    587093136, -296932314, 209526433, -164312823, 134721951, -112608390,
    94698182, -79462738, 66122603, -54259476, 43642395, -34141287,
    25680423, -18211813, 11699426, -6109679, 1405817, 2455159,
    -5523834, 7858503, -9524446, 10592616, -11137949, 11237473,
    -10968347, 10405957, -9622158, 8683737, -7651155, 6577593,
    -5508332, 4480448, -3522827, 2656450, -1894930, 1245235,
    -708561, 281302, 43942, -277359, 430966, -517728,
    550786, -542813, 505508, -449222, 382730, -313119,
    245785, -184528, 131709, -88455, 54898, -30419,
    42530, -58267, 71807, -79854, 78244, -62014,
    25539, 37248, -132537, 266250, -443557, 668333,
    -942565, 1265738, -1634232, 2040758, -2473882, 2917663,
    -3351460, 3749920, -4083206, 4317460, -4415531, 4337969,
    -4044270, 3494355, -2650252, 1477921, 50818, -1956321,
    4249203, -6928514, 9980100, -13375189, 17069243, -21001115,
    25092478, -29247477, 33352493, -37275789, 40866698, -43953763,
    46340838, -47799438, 48054191, -46755231, 43424662, -37347683,
    27333603, -11128951, -16284341, 69097425, -209900837, 1958282340,
    506263273, -268919786, 195065842, -156161953, 130259738, -110562593,
    94332701, -80297697, 67817520, -56557930, 46343381, -37083372,
    28732477, -21267303, 14672671, -8933206, 4028323, 70529,
    -3401055, 6010179, -7953300, 9292970, -10097197, 10437524,
    -10387015, 10018278, -9401601, 8603294, -7684287, 6699027,
    -5694692, 4710728, -3778709, 2922473, -2158527, 1496656,
    -940702, 489458, -137623, -123223, 303671, -415601,
    471393, -483250, 462650, -419940, 364054, -302357,
    240605, -182995, 132294, -90015, 56643, -31855,
    45903, -64117, 81163, -93883, 98198, -89145,
    60988, -7416, -78169, 202274, -370848, 588736,
    -859085, 1182704, -1557425, 1977492, -2433020, 2909552,
    -3387775, 3843412, -4247333, 4565916, -4761664, 4794095,
    -4620902, 4199360, -3487949, 2448162, -1046439, -743847,
    2940395, -5550074, 8567156, -11971769, 15728607, -19785947,
    24074950, -28509242, 32984658, -37378996, 41551474, -45341397,
    48565205, -51010425, 52423851, -52488707, 50779797, -46671479,
    39134306, -26232493, 3656129, 40866812, -162560908, 1987554052,
    427046567, -239539838, 179237171, -146790831, 124724459, -107577122,
    93148410, -80424472, 68906250, -58344486, 48619498, -39680518,
    31512436, -24116408, 17498068, -11660263, 6598667, -2299355,
    -1262231, 4121283, -6322873, 7920646, -8975117, 9551745,
    -9718884, 9545742, -9100441, 8448240, -7650010, 6760985,
    -5829822, 4897987, -3999451, 3160691, -2400946, 1732719,
    -1162447, 691317, -316159, 30380, 175105, -311001,
    388822, -420202, 416307, -387389, 342465, -289116,
    233403, -179883, 131701, -90743, 57834, -32952,
    48955, -69533, 89993, -107346, 117632, -115929,
    96440, -52658, -22368, 135682, -293965, 503001,
    -767077, 1088328, -1466070, 1896139, -2370293, 2875695,
    -3394535, 3903825, -4375399, 4776163, -5068592, 5211520,
    -5161191, 4872585, -4300979, 3403710, -2142096, 483443,
    1596922, -4113661, 7069569, -10453895, 14240930, -18388882,
    22839075, -27515445, 32324295, -37154151, 41875514, -46340091,
    50378847, -53797677, 56368531, -57811757, 57760748, -55688493,
    50743854, -41344041, 23975107, 11426426, -111080063, 2011158154,
    349787922, -209075172, 162204248, -136300125, 118178436, -103688693,
    91163916, -79848456, 69384427, -59607611, 50454072, -41912535,
    33997919, -26735643, 20151920, -14267660, 9094732, -4633878,
    873842, 2208585, -4647804, 6488119, -7782061, 8588461,
    -8970389, 8993074, -8721886, 8220474, -7549124, 6763376,
    -5912940, 5040930, -4183412, 3369254, -2620251, 1951497,
    -1371953, 885174, -490133, 182110, 46411, -204871,
    303834, -354266, 366931, -351901, 318197, -273550,
    224275, -175247, 129960, -90651, 58477, -33712,
    51648, -74453, 98206, -120112, 136362, -142122,
    131578, -98084, 34388, 67032, -213539, 411815,
    -667260, 983325, -1360826, 1797240, -2286049, 2816156,
    -3371418, 3930341, -4465973, 4946034, -5333299, 5586266,
    -5660100, 5507866, -5082005, 4336047, -3226497, 1714845,
    230373, -2631530, 5499958, -8834175, 12618343, -16821030,
    21394300, -26273152, 31375272, -36601019, 41833478, -46938294,
    51762776, -56133392, 59850042, -62673944, 64302539, -64316236,
    62058144, -56331904, 44504513, -19011117, -55603534, 2028970707,
    274815913, -177807771, 144137250, -124798300, 110691791, -98941372,
    88404557, -78581086, 69253030, -60340420, 51834399, -43762559,
    36169265, -29103686, 22612182, -16733399, 11495189, -6912870,
    2988515, 288957, -2943023, 5008306, -6528929, 7556615,
    -8148628, 8365665, -8269795, 7922515, -7383007, 6706634,
    -5943725, 5138663, -4329287, 3546592, -2814727, 2151233,
    -1567501, 1069409, -658067, 330656, -81284, -98160,
    217203, -286058, 314996, -313827, 291502, -255834,
    213337, -169159, 127110, -89759, 58580, -34140,
    53946, -78821, 105714, -132050, 154209, -167479,
    166084, -143290, 91608, -3093, -130242, 315925,
    -560431, 868511, -1242482, 1681495, -2180826, 2731223,
    -3318361, 3922433, -4517942, 5073704, -5553118, 5914700,
    -6112923, 6099327, -5823917, 5236797, -4290014, 2939547,
    -1147377, -1116419, 3871661, -7126194, 10874243, -15095072,
    19751974, -24791660, 30144021, -35722247, 41423206, -47127891,
    52701634, -57993513, 62833937, -67028413, 70343388, -72474686,
    72974278, -71063373, 65071072, -50219132, 3696883, 2040898072,
    202440979, -146016981, 125211224, -112400587, 102341758, -93386122,
    84902116, -76639691, 68518322, -60540695, 52751826, -45217174,
    38009690, -31201551, 24858647, -19036865, 13779684, -9116775,
    5063444, -1620779, -1223626, 3494454, -5227076, 6465691,
    -7261286, 7669523, -7748647, 7557481, -7153597, 6591705,
    -5922317, 5190695, -4436112, 3691418, -2982890, 2330350,
    -1747510, 1242503, -818553, 474753, -206873, 8192,
    129707, -216203, 260992, -273540, 262651, -236159,
    200715, -161698, 123200, -88093, 58159, -34243,
    55817, -82583, 112434, -143038, 170995, -191759,
    199640, -187872, 148788, -74089, -44776, 216125,
    -447459, 744797, -1111950, 1549762, -2055354, 2621414,
    -3235565, 3879874, -4530523, 5157704, -5725754, 6193572,
    -6515321, 6641435, -6519899, 6097807, -5323142, 4146723,
    -2524279, 418556, 2198621, -5344402, 9023184, -13225163,
    17925255, -23082428, 28639493, -34523362, 40645755, -46904293,
    53183855, -59357967, 65289843, -70832328, 75825275, -80087015,
    83391469, -85405840, 85497640, -81958202, 66623527, 2046877492,
    132953752, -113977626, 105604589, -99227920, 93211930, -87080283,
    80694485, -74047287, 67191760, -60210869, 53201795, -46266508,
    39505414, -33012739, 26873105, -21158994, 15929008, -11226817,
    7080753, -3503994, 495262, 1960021, -3888210, 5325628,
    -6316572, 6911215, -7163490, 7129051, -6863371, 6420040,
    -5849313, 5196937, -4503277, 3802741, -3123498, 2487469,
    -1910550, 1403048, -970261, 613184, -329277, 113255,
    42124, -145335, 205420, -231423, 231931, -214728,
    186551, -152957, 118286, -85688, 57230, -34031,
];

pub static SRC_INT32_40_7_2976_5000: StageDescriptor = StageDescriptor {
    name: "int32_40_7_2976_5000",
    input_stride: 4,
    output_stride: 23,
    subfilter_count: 40,
    subfilter_length: 28,
    block_in: 7,
    block_out: 40,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_40_7_2976_5000_FIR),
};

static SRC_INT32_40_7_2976_5000_FIR: [i32; 1120] = [
    -63344, 587837, -1778773, 2725685, -836458, -7054457,
    21391679, -35959303, 36647380, -5847269, -67955260, 180306286,
    -307926196, 420568399, 1712547900, 376425678, -297718453, 182252705,
    -73753474, -535334, 33530239, -34972924, 21661362, -7691120,
    -340709, 2488881, -1714945, 586233, -58988, 586444,
    -1837228, 2959196, -1344148, -6370719, 21026639, -36819843,
    39679866, -11242554, -61762641, 177585585, -317184376, 465365313,
    1710268488, 333024160, -286625627, 183434428, -79142297, 4673694,
    30342716, -33867443, 21836837, -8279297, 141351, 2249936,
    -1646265, 581802, -53607, 581893, -1889792, 3188235,
    -1861923, -5641558, 20565467, -37548187, 42613482, -16700903,
    -55192477, 174083783, -325430042, 510726661, 1705715250, 290447887,
    -274713491, 183863723, -84108641, 9761047, 27099080, -32649942,
    21919621, -8817821, 608084, 2009974, -1573257, 574721,
    -47165, 574032, -1935959, 3411604, -2387828, -4868865,
    20007782, -38138391, 45434130, -22201373, -48263476, 169796915,
    -332601987, 556560173, 1698899346, 248777718, -262048883, 183555434,
    -88641333, 14708811, 23813542, -31327807, 21911578, -9305763,
    1057966, 1770085, -1496445, 565172, -39625, 562720,
    -1975229, 3628091, -2919813, -4054774, 19353603, -38584963,
    48127891, -27722434, -40996150, 164723941, -338640982, 602771306,
    1689837471, 208091131, -248699481, 182526882, -92731117, 19499976,
    20500193, -29908697, 21814910, -9742434, 1489591, 1531321,
    -1416350, 553342, -30962, 547828, -2007119, 3836474,
    -3455740, -3201651, 18603359, -38882890, 50681083, -33242045,
    -33412778, 158866809, -343489991, 649263498, 1678551809, 168462031,
    -234733566, 180797746, -96370657, 24118490, 17172955, -28400504,
    21632133, -10127380, 1901676, 1294694, -1333486, 539421,
    -21152, 529242, -2031162, 4035524, -3993390, -2312094,
    17757900, -39027671, 53080326, -38737736, -25537342, 152230513,
    -347094385, 695938424, 1665069964, 129960574, -220219800, 178389946,
    -99554530, 28549304, 13845523, -26811314, 21366063, -10460379,
    2293059, 1061172, -1248362, 523602, -10181, 506859,
    -2046911, 4224016, -4530471, -1388928, 16818496, -39015350,
    55312601, -44186687, -17395476, 144823138, -349402157, 742696263,
    1649424881, 92653004, -205226997, 175327515, -102279205, 32778414,
    10531316, -25149369, 21019797, -10741435, 2662702, 831674,
    -1161477, 506077, 1958, 480598, -2053941, 4400730,
    -5064625, -435196, 15786850, -38842541, 57365315, -49565819,
    -9014389, 136655888, -350364123, 789435970, 1631654746, 56601503,
    -189823900, 171636471, -104543029, 36792897, 7243427, -23423034,
    20596692, -10970770, 3009696, 607070, -1073315, 487040,
    15263, 450389, -2051853, 4564462, -5593437, 545847,
    14665093, -38506456, 59226355, -54851877, -422796, 127743119,
    -349934124, 836055553, 1611802873, 21864052, -174078961, 167344678,
    -106346191, 40580938, 3994577, -21640755, 20100346, -11148823,
    3333255, 388177, -984350, 466681, 29728, 416184,
    -2040276, 4714023, -6114447, 1550744, 13455791, -38004928,
    60884154, -60021525, 8349171, 118102343, -348069213, 882452354,
    1589917574, -11505691, -158060124, 162481706, -107690689, 44131863,
    797069, -19811024, 19534576, -11276238, 3632720, 175758,
    -895038, 445189, 45334, 377955, -2018872, 4848253,
    -6625157, 2575844, 12161939, -37336434, 62327747, -65051436,
    17270050, 107754237, -344729839, 928523337, 1566052018, -43458497,
    -141834614, 157078688, -108580288, 47436156, -2337254, -17942343,
    18903398, -11353856, 3907556, -29479, -805817, 422751,
    62054, 335691, -1987338, 4966022, -7123042, 3617317,
    10786960, -36500118, 63546828, -69918388, 26307149, 96722629,
    -339880023, 974165373, 1540264069, -73949664, -125468732, 151168171,
    -109020471, 50485474, -5397044, -16043187, 18211005, -11382709,
    4157354, -226885, -717109, 399547, 79855, 289405,
    -1945405, 5066236, -7605558, 4671161, 9334703, -35495801,
    64531805, -74599360, 35426644, 85034480, -333487518, 1019275533,
    1512616121, -102939092, -109027655, 144783968, -109018385, 53272661,
    -8371491, -14121972, 17461745, -11364009, 4381825, -415871,
    -629314, 375754, 98689, 239133, -1892849, 5147848,
    -8070159, 5733219, 7809431, -34324005, 65273858, -79071630,
    44593697, 72719852, -325523968, 1063751375, 1483174908, -130391350,
    -92575243, 137961006, -108582781, 55791752, -11250353, -12187020,
    16660097, -11299135, 4580800, -595904, -542809, 351543,
    118504, 184932, -1829484, 5209861, -8514304, 6799192,
    6215816, -32985960, 65764985, -83312868, 53772566, 59811862,
    -315965051, 1107491238, 1452011309, -156275724, -76173852, 130735171,
    -107723951, 58037973, -14023983, -10246525, 15810653, -11189631,
    4754229, -766513, -457951, 327077, 139235, 126884,
    -1755171, 5251333, -8935466, 7864655, 4558927, -31483614,
    65998054, -87301241, 62926730, 46346630, -304790608, 1150394531,
    1419200138, -180566248, -59884157, 123143155, -106453657, 60007742,
    -16683362, -8308524, 14918092, -11037184, 4902171, -927287,
    -375073, 302513, 160807, 65095, -1669820, 5271386,
    -9331151, 8925071, 2844216, -29819644, 65966852, -91015502,
    72019014, 32363211, -291984769, 1192362022, 1384819926, -203241730,
    -43764983, 115222306, -104785054, 61698654, -19220124, -6380865,
    13987162, -10843621, 5024799, -1077874, -294483, 278000,
    183136, -303, -1573389, 5269212, -9698904, 9975812,
    1077508, -27997454, 65666124, -94435096, 81011719, 17903518,
    -277536057, 1233296121, 1348952687, -224285746, -27873143, 107010465,
    -102732620, 63109473, -21626569, -4471181, 13022655, -10610895,
    5122391, -1217983, -216465, 253678, 206128, -69155,
    -1465887, 5244076, -10036323, 11012170, -735021, -26021181,
    65091616, -97540248, 89866765, 3012235, -261437485, 1273101162,
    1311683681, -243686639, -12263289, 98545824, -100312064, 64240114,
    -23895689, -2586860, 12029385, -10341073, 5195324, -1347379,
    -141278, 229680, 229680, -141278, -1347379, 5195324,
    -10341073, 12029385, -2586860, -23895689, 64240114, -100312064,
    98545824, -12263289, -243686639, 1311683681, 1273101162, -261437485,
    3012235, 89866765, -97540248, 65091616, -26021181, -735021,
    11012170, -10036323, 5244076, -1465887, -69155, 206128,
    253678, -216465, -1217983, 5122391, -10610895, 13022655,
    -4471181, -21626569, 63109473, -102732620, 107010465, -27873143,
    -224285746, 1348952687, 1233296121, -277536057, 17903518, 81011719,
    -94435096, 65666124, -27997454, 1077508, 9975812, -9698904,
    5269212, -1573389, -303, 183136, 278000, -294483,
    -1077874, 5024799, -10843621, 13987162, -6380865, -19220124,
    61698654, -104785054, 115222306, -43764983, -203241730, 1384819926,
    1192362022, -291984769, 32363211, 72019014, -91015502, 65966852,
    -29819644, 2844216, 8925071, -9331151, 5271386, -1669820,
    65095, 160807, 302513, -375073, -927287, 4902171,
    -11037184, 14918092, -8308524, -16683362, 60007742, -106453657,
    123143155, -59884157, -180566248, 1419200138, 1150394531, -304790608,
    46346630, 62926730, -87301241, 65998054, -31483614, 4558927,
    7864655, -8935466, 5251333, -1755171, 126884, 139235,
    327077, -457951, -766513, 4754229, -11189631, 15810653,
    -10246525, -14023983, 58037973, -107723951, 130735171, -76173852,
    -156275724, 1452011309, 1107491238, -315965051, 59811862, 53772566,
    -83312868, 65764985, -32985960, 6215816, 6799192, -8514304,
    5209861, -1829484, 184932, 118504, 351543, -542809,
    -595904, 4580800, -11299135, 16660097, -12187020, -11250353,
    55791752, -108582781, 137961006, -92575243, -130391350, 1483174908,
    1063751375, -325523968, 72719852, 44593697, -79071630, 65273858,
    -34324005, 7809431, 5733219, -8070159, 5147848, -1892849,
    239133, 98689, 375754, -629314, -415871, 4381825,
    -11364009, 17461745, -14121972, -8371491, 53272661, -109018385,
    144783968, -109027655, -102939092, 1512616121, 1019275533, -333487518,
    85034480, 35426644, -74599360, 64531805, -35495801, 9334703,
    4671161, -7605558, 5066236, -1945405, 289405, 79855,
    399547, -717109, -226885, 4157354, -11382709, 18211005,
    -16043187, -5397044, 50485474, -109020471, 151168171, -125468732,
    -73949664, 1540264069, 974165373, -339880023, 96722629, 26307149,
    -69918388, 63546828, -36500118, 10786960, 3617317, -7123042,
    4966022, -1987338, 335691, 62054, 422751, -805817,
    -29479, 3907556, -11353856, 18903398, -17942343, -2337254,
    47436156, -108580288, 157078688, -141834614, -43458497, 1566052018,
    928523337, -344729839, 107754237, 17270050, -65051436, 62327747,
    -37336434, 12161939, 2575844, -6625157, 4848253, -2018872,
    377955, 45334, 445189, -895038, 175758, 3632720,
    -11276238, 19534576, -19811024, 797069, 44131863, -107690689,
    162481706, -158060124, -11505691, 1589917574, 882452354, -348069213,
    118102343, 8349171, -60021525, 60884154, -38004928, 13455791,
    1550744, -6114447, 4714023, -2040276, 416184, 29728,
    466681, -984350, 388177, 3333255, -11148823, 20100346,
    -21640755, 3994577, 40580938, -106346191, 167344678, -174078961,
    21864052, 1611802873, 836055553, -349934124, 127743119, -422796,
    -54851877, 59226355, -38506456, 14665093, 545847, -5593437,
    4564462, -2051853, 450389, 15263, 487040, -1073315,
    607070, 3009696, -10970770, 20596692, -23423034, 7243427,
    36792897, -104543029, 171636471, -189823900, 56601503, 1631654746,
    789435970, -350364123, 136655888, -9014389, -49565819, 57365315,
    -38842541, 15786850, -435196, -5064625, 4400730, -2053941,
    480598, 1958, 506077, -1161477, 831674, 2662702,
    -10741435, 21019797, -25149369, 10531316, 32778414, -102279205,
    175327515, -205226997, 92653004, 1649424881, 742696263, -349402157,
    144823138, -17395476, -44186687, 55312601, -39015350, 16818496,
    -1388928, -4530471, 4224016, -2046911, 506859, -10181,
    523602, -1248362, 1061172, 2293059, -10460379, 21366063,
    -26811314, 13845523, 28549304, -99554530, 178389946, -220219800,
    129960574, 1665069964, 695938424, -347094385, 152230513, -25537342,
    -38737736, 53080326, -39027671, 17757900, -2312094, -3993390,
    4035524, -2031162, 529242, -21152, 539421, -1333486,
    1294694, 1901676, -10127380, 21632133, -28400504, 17172955,
    24118490, -96370657, 180797746, -234733566, 168462031, 1678551809,
    649263498, -343489991, 158866809, -33412778, -33242045, 50681083,
    -38882890, 18603359, -3201651, -3455740, 3836474, -2007119,
    547828, -30962, 553342, -1416350, 1531321, 1489591,
    -9742434, 21814910, -29908697, 20500193, 19499976, -92731117,
    182526882, -248699481, 208091131, 1689837471, 602771306, -338640982,
    164723941, -40996150, -27722434, 48127891, -38584963, 19353603,
    -4054774, -2919813, 3628091, -1975229, 562720, -39625,
    565172, -1496445, 1770085, 1057966, -9305763, 21911578,
    -31327807, 23813542, 14708811, -88641333, 183555434, -262048883,
    248777718, 1698899346, 556560173, -332601987, 169796915, -48263476,
    -22201373, 45434130, -38138391, 20007782, -4868865, -2387828,
    3411604, -1935959, 574032, -47165, 574721, -1573257,
    2009974, 608084, -8817821, 21919621, -32649942, 27099080,
    9761047, -84108641, 183863723, -274713491, 290447887, 1705715250,
    510726661, -325430042, 174083783, -55192477, -16700903, 42613482,
    -37548187, 20565467, -5641558, -1861923, 3188235, -1889792,
    581893, -53607, 581802, -1646265, 2249936, 141351,
    -8279297, 21836837, -33867443, 30342716, 4673694, -79142297,
    183434428, -286625627, 333024160, 1710268488, 465365313, -317184376,
    177585585, -61762641, -11242554, 39679866, -36819843, 21026639,
    -6370719, -1344148, 2959196, -1837228, 586444, -58988,
    586233, -1714945, 2488881, -340709, -7691120, 21661362,
    -34972924, 33530239, -535334, -73753474, 182252705, -297718453,
    376425678, 1712547900, 420568399, -307926196, 180306286, -67955260,
    -5847269, 36647380, -35959303, 21391679, -7054457, -836458,
    2725685, -1778773, 587837, -63344,
];

pub static SRC_INT32_40_21_2381_5000: StageDescriptor = StageDescriptor {
    name: "int32_40_21_2381_5000",
    input_stride: 11,
    output_stride: 21,
    subfilter_count: 40,
    subfilter_length: 20,
    block_in: 21,
    block_out: 40,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_40_21_2381_5000_FIR),
};

static SRC_INT32_40_21_2381_5000_FIR: [i32; 800] = [
    -174829, 1307779, -1575017, -5912165, 25966933, -43641250,
    16595127, 98346802, -295525440, 502508153, 1584826659, 463566164,
    -292030766, 104287915, 11080371, -41305094, 25851885, -6401260,
    -1270363, 1225888, -183784, 1388979, -1889269, -5378578,
    25987327, -45889336, 22208416, 91882740, -298079868, 541813968,
    1582979252, 425057798, -287637107, 109699982, 5681050, -38892049,
    25645831, -6845692, -976156, 1143770, -191865, 1468996,
    -2212186, -4800864, 25909676, -48038171, 27902506, 84903812,
    -299654388, 581412128, 1579288511, 387050999, -282387178, 114578865,
    413196, -36413254, 25352648, -7245481, -693159, 1061866,
    -198914, 1547319, -2542749, -4179589, 25730865, -50076620,
    33658877, 77420112, -300211079, 621229632, 1573762575, 349611702,
    -276325000, 118922349, -4708064, -33879765, 24976425, -7600830,
    -422047, 980589, -204771, 1623414, -2879856, -3515528,
    25448077, -51993634, 39458268, 69443761, -299713903, 661192138,
    1566413621, 312803682, -269495751, 122730101, -9668538, -31302520,
    24521435, -7912113, -163415, 900326, -209270, 1696728,
    -3222324, -2809665, 25058813, -53778298, 45280728, 60988919,
    -298128842, 701224144, 1557257834, 276688412, -261945614, 126003626,
    -14454997, -28692294, 23992116, -8179874, 82231, 821435,
    -212245, 1766692, -3568888, -2063198, 24560917, -55419878,
    51105671, 52071786, -295424027, 741249171, 1546315362, 241324927,
    -253721627, 128746213, -19055195, -26059667, 23393046, -8404813,
    314462, 744247, -213529, 1832719, -3918205, -1277545,
    23952590, -56907863, 56911936, 42710605, -291569870, 781189953,
    1533610261, 206769694, -244871530, 130962883, -23457892, -23414989,
    22728923, -8587782, 532935, 669063, -212954, 1894211,
    -4268858, -454342, 23232413, -58232018, 62677846, 32925646,
    -286539184, 820968632, 1519170428, 173076496, -235443618, 132660326,
    -27652862, -20768349, 22004538, -8729771, 737383, 596157,
    -210353, 1950560, -4619358, 404555, 22399362, -59382425,
    68381273, 22739196, -280307301, 860506952, 1503027525, 140296321,
    -225486587, 133846839, -31630910, -18129541, 21224756, -8831900,
    927617, 525774, -205562, 2001149, -4968150, 1297068,
    21452828, -60349533, 73999711, 12175532, -272852186, 899726456,
    1485216893, 108477258, -215049385, 134532254, -35383872, -15508037,
    20394493, -8895412, 1103519, 458127, -198421, 2045357,
    -5313612, 2220900, 20392627, -61124208, 79510345, 1260894,
    -264154540, 938548689, 1465777454, 77664406, -204181068, 134727873,
    -38904621, -12912960, 19518697, -8921659, 1265047, 393406,
    -188773, 2082562, -5654066, 3173537, 19219022, -61697773,
    84890124, -9976555, -254197897, 976895394, 1444751609, 47899791,
    -192930653, 134446382, -42187066, -10353061, 18602324, -8912097,
    1412225, 331770, -176469, 2112142, -5987780, 4152246,
    17932730, -62062061, 90115842, -21506771, -242968722, 1014688722,
    1422185114, 19222294, -181346973, 133701786, -45226143, -7836693,
    17650320, -8868270, 1545141, 273352, -161367, 2133482,
    -6312975, 5154086, 16534937, -62209454, 95164214, -33297880,
    -230456491, 1051851423, 1398126965, -8332417, -169478542, 132509316,
    -48017812, -5371795, 16667600, -8791804, 1663947, 218259,
    -143334, 2145974, -6627829, 6175908, 15027304, -62132935,
    100011960, -45316237, -216653765, 1088307058, 1372629258, -34731938,
    -157373417, 130885353, -50559037, -2965870, 15659030, -8684397,
    1768852, 166571, -122248, 2149022, -6930487, 7214363,
    13411979, -61826125, 104635891, -57526487, -201556265, 1123980191,
    1345747050, -59947175, -145079064, 128847342, -52847778, -625972,
    14629411, -8547807, 1860120, 118344, -97996, 2142045,
    -7219065, 8265905, 11691604, -61283328, 109012988, -69891643,
    -185162928, 1158796591, 1317538213, -83952377, -132642231, 126413704,
    -54882967, 1641310, 13583458, -8383842, 1938066, 73611,
    -70483, 2124483, -7491659, 9326807, 9869316, -60499571,
    113120499, -82373157, -167475959, 1192683428, 1288063270, -106725163,
    -120108826, 123603747, -56664485, 3829863, 12525787, -8194353,
    2003051, 32383, -39623, 2095798, -7746351, 10393162,
    7948754, -59470646, 116936018, -94931008, -148500874, 1225569462,
    1257385239, -128246532, -107523794, 120437579, -58193142, 5934056,
    11460898, -7981222, 2055481, -5351, -5351, 2055481,
    -7981222, 11460898, 5934056, -58193142, 120437579, -107523794,
    -128246532, 1257385239, 1225569462, -148500874, -94931008, 116936018,
    -59470646, 7948754, 10393162, -7746351, 2095798, -39623,
    32383, 2003051, -8194353, 12525787, 3829863, -56664485,
    123603747, -120108826, -106725163, 1288063270, 1192683428, -167475959,
    -82373157, 113120499, -60499571, 9869316, 9326807, -7491659,
    2124483, -70483, 73611, 1938066, -8383842, 13583458,
    1641310, -54882967, 126413704, -132642231, -83952377, 1317538213,
    1158796591, -185162928, -69891643, 109012988, -61283328, 11691604,
    8265905, -7219065, 2142045, -97996, 118344, 1860120,
    -8547807, 14629411, -625972, -52847778, 128847342, -145079064,
    -59947175, 1345747050, 1123980191, -201556265, -57526487, 104635891,
    -61826125, 13411979, 7214363, -6930487, 2149022, -122248,
    166571, 1768852, -8684397, 15659030, -2965870, -50559037,
    130885353, -157373417, -34731938, 1372629258, 1088307058, -216653765,
    -45316237, 100011960, -62132935, 15027304, 6175908, -6627829,
    2145974, -143334, 218259, 1663947, -8791804, 16667600,
    -5371795, -48017812, 132509316, -169478542, -8332417, 1398126965,
    1051851423, -230456491, -33297880, 95164214, -62209454, 16534937,
    5154086, -6312975, 2133482, -161367, 273352, 1545141,
    -8868270, 17650320, -7836693, -45226143, 133701786, -181346973,
    19222294, 1422185114, 1014688722, -242968722, -21506771, 90115842,
    -62062061, 17932730, 4152246, -5987780, 2112142, -176469,
    331770, 1412225, -8912097, 18602324, -10353061, -42187066,
    134446382, -192930653, 47899791, 1444751609, 976895394, -254197897,
    -9976555, 84890124, -61697773, 19219022, 3173537, -5654066,
    2082562, -188773, 393406, 1265047, -8921659, 19518697,
    -12912960, -38904621, 134727873, -204181068, 77664406, 1465777454,
    938548689, -264154540, 1260894, 79510345, -61124208, 20392627,
    2220900, -5313612, 2045357, -198421, 458127, 1103519,
    -8895412, 20394493, -15508037, -35383872, 134532254, -215049385,
    108477258, 1485216893, 899726456, -272852186, 12175532, 73999711,
    -60349533, 21452828, 1297068, -4968150, 2001149, -205562,
    525774, 927617, -8831900, 21224756, -18129541, -31630910,
    133846839, -225486587, 140296321, 1503027525, 860506952, -280307301,
    22739196, 68381273, -59382425, 22399362, 404555, -4619358,
    1950560, -210353, 596157, 737383, -8729771, 22004538,
    -20768349, -27652862, 132660326, -235443618, 173076496, 1519170428,
    820968632, -286539184, 32925646, 62677846, -58232018, 23232413,
    -454342, -4268858, 1894211, -212954, 669063, 532935,
    -8587782, 22728923, -23414989, -23457892, 130962883, -244871530,
    206769694, 1533610261, 781189953, -291569870, 42710605, 56911936,
    -56907863, 23952590, -1277545, -3918205, 1832719, -213529,
    744247, 314462, -8404813, 23393046, -26059667, -19055195,
    128746213, -253721627, 241324927, 1546315362, 741249171, -295424027,
    52071786, 51105671, -55419878, 24560917, -2063198, -3568888,
    1766692, -212245, 821435, 82231, -8179874, 23992116,
    -28692294, -14454997, 126003626, -261945614, 276688412, 1557257834,
    701224144, -298128842, 60988919, 45280728, -53778298, 25058813,
    -2809665, -3222324, 1696728, -209270, 900326, -163415,
    -7912113, 24521435, -31302520, -9668538, 122730101, -269495751,
    312803682, 1566413621, 661192138, -299713903, 69443761, 39458268,
    -51993634, 25448077, -3515528, -2879856, 1623414, -204771,
    980589, -422047, -7600830, 24976425, -33879765, -4708064,
    118922349, -276325000, 349611702, 1573762575, 621229632, -300211079,
    77420112, 33658877, -50076620, 25730865, -4179589, -2542749,
    1547319, -198914, 1061866, -693159, -7245481, 25352648,
    -36413254, 413196, 114578865, -282387178, 387050999, 1579288511,
    581412128, -299654388, 84903812, 27902506, -48038171, 25909676,
    -4800864, -2212186, 1468996, -191865, 1143770, -976156,
    -6845692, 25645831, -38892049, 5681050, 109699982, -287637107,
    425057798, 1582979252, 541813968, -298079868, 91882740, 22208416,
    -45889336, 25987327, -5378578, -1889269, 1388979, -183784,
    1225888, -1270363, -6401260, 25851885, -41305094, 11080371,
    104287915, -292030766, 463566164, 1584826659, 502508153, -295525440,
    98346802, 16595127, -43641250, 25966933, -5912165, -1575017,
    1307779, -174829,
];

pub static SRC_INT32_40_21_2976_5000: StageDescriptor = StageDescriptor {
    name: "int32_40_21_2976_5000",
    input_stride: 11,
    output_stride: 21,
    subfilter_count: 40,
    subfilter_length: 28,
    block_in: 21,
    block_out: 40,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_40_21_2976_5000_FIR),
};

static SRC_INT32_40_21_2976_5000_FIR: [i32; 1120] = [
    -63344, 587837, -1778773, 2725685, -836458, -7054457,
    21391679, -35959303, 36647380, -5847269, -67955260, 180306286,
    -307926196, 420568399, 1712547900, 376425678, -297718453, 182252705,
    -73753474, -535334, 33530239, -34972924, 21661362, -7691120,
    -340709, 2488881, -1714945, 586233, -58988, 586444,
    -1837228, 2959196, -1344148, -6370719, 21026639, -36819843,
    39679866, -11242554, -61762641, 177585585, -317184376, 465365313,
    1710268488, 333024160, -286625627, 183434428, -79142297, 4673694,
    30342716, -33867443, 21836837, -8279297, 141351, 2249936,
    -1646265, 581802, -53607, 581893, -1889792, 3188235,
    -1861923, -5641558, 20565467, -37548187, 42613482, -16700903,
    -55192477, 174083783, -325430042, 510726661, 1705715250, 290447887,
    -274713491, 183863723, -84108641, 9761047, 27099080, -32649942,
    21919621, -8817821, 608084, 2009974, -1573257, 574721,
    -47165, 574032, -1935959, 3411604, -2387828, -4868865,
    20007782, -38138391, 45434130, -22201373, -48263476, 169796915,
    -332601987, 556560173, 1698899346, 248777718, -262048883, 183555434,
    -88641333, 14708811, 23813542, -31327807, 21911578, -9305763,
    1057966, 1770085, -1496445, 565172, -39625, 562720,
    -1975229, 3628091, -2919813, -4054774, 19353603, -38584963,
    48127891, -27722434, -40996150, 164723941, -338640982, 602771306,
    1689837471, 208091131, -248699481, 182526882, -92731117, 19499976,
    20500193, -29908697, 21814910, -9742434, 1489591, 1531321,
    -1416350, 553342, -30962, 547828, -2007119, 3836474,
    -3455740, -3201651, 18603359, -38882890, 50681083, -33242045,
    -33412778, 158866809, -343489991, 649263498, 1678551809, 168462031,
    -234733566, 180797746, -96370657, 24118490, 17172955, -28400504,
    21632133, -10127380, 1901676, 1294694, -1333486, 539421,
    -21152, 529242, -2031162, 4035524, -3993390, -2312094,
    17757900, -39027671, 53080326, -38737736, -25537342, 152230513,
    -347094385, 695938424, 1665069964, 129960574, -220219800, 178389946,
    -99554530, 28549304, 13845523, -26811314, 21366063, -10460379,
    2293059, 1061172, -1248362, 523602, -10181, 506859,
    -2046911, 4224016, -4530471, -1388928, 16818496, -39015350,
    55312601, -44186687, -17395476, 144823138, -349402157, 742696263,
    1649424881, 92653004, -205226997, 175327515, -102279205, 32778414,
    10531316, -25149369, 21019797, -10741435, 2662702, 831674,
    -1161477, 506077, 1958, 480598, -2053941, 4400730,
    -5064625, -435196, 15786850, -38842541, 57365315, -49565819,
    -9014389, 136655888, -350364123, 789435970, 1631654746, 56601503,
    -189823900, 171636471, -104543029, 36792897, 7243427, -23423034,
    20596692, -10970770, 3009696, 607070, -1073315, 487040,
    15263, 450389, -2051853, 4564462, -5593437, 545847,
    14665093, -38506456, 59226355, -54851877, -422796, 127743119,
    -349934124, 836055553, 1611802873, 21864052, -174078961, 167344678,
    -106346191, 40580938, 3994577, -21640755, 20100346, -11148823,
    3333255, 388177, -984350, 466681, 29728, 416184,
    -2040276, 4714023, -6114447, 1550744, 13455791, -38004928,
    60884154, -60021525, 8349171, 118102343, -348069213, 882452354,
    1589917574, -11505691, -158060124, 162481706, -107690689, 44131863,
    797069, -19811024, 19534576, -11276238, 3632720, 175758,
    -895038, 445189, 45334, 377955, -2018872, 4848253,
    -6625157, 2575844, 12161939, -37336434, 62327747, -65051436,
    17270050, 107754237, -344729839, 928523337, 1566052018, -43458497,
    -141834614, 157078688, -108580288, 47436156, -2337254, -17942343,
    18903398, -11353856, 3907556, -29479, -805817, 422751,
    62054, 335691, -1987338, 4966022, -7123042, 3617317,
    10786960, -36500118, 63546828, -69918388, 26307149, 96722629,
    -339880023, 974165373, 1540264069, -73949664, -125468732, 151168171,
    -109020471, 50485474, -5397044, -16043187, 18211005, -11382709,
    4157354, -226885, -717109, 399547, 79855, 289405,
    -1945405, 5066236, -7605558, 4671161, 9334703, -35495801,
    64531805, -74599360, 35426644, 85034480, -333487518, 1019275533,
    1512616121, -102939092, -109027655, 144783968, -109018385, 53272661,
    -8371491, -14121972, 17461745, -11364009, 4381825, -415871,
    -629314, 375754, 98689, 239133, -1892849, 5147848,
    -8070159, 5733219, 7809431, -34324005, 65273858, -79071630,
    44593697, 72719852, -325523968, 1063751375, 1483174908, -130391350,
    -92575243, 137961006, -108582781, 55791752, -11250353, -12187020,
    16660097, -11299135, 4580800, -595904, -542809, 351543,
    118504, 184932, -1829484, 5209861, -8514304, 6799192,
    6215816, -32985960, 65764985, -83312868, 53772566, 59811862,
    -315965051, 1107491238, 1452011309, -156275724, -76173852, 130735171,
    -107723951, 58037973, -14023983, -10246525, 15810653, -11189631,
    4754229, -766513, -457951, 327077, 139235, 126884,
    -1755171, 5251333, -8935466, 7864655, 4558927, -31483614,
    65998054, -87301241, 62926730, 46346630, -304790608, 1150394531,
    1419200138, -180566248, -59884157, 123143155, -106453657, 60007742,
    -16683362, -8308524, 14918092, -11037184, 4902171, -927287,
    -375073, 302513, 160807, 65095, -1669820, 5271386,
    -9331151, 8925071, 2844216, -29819644, 65966852, -91015502,
    72019014, 32363211, -291984769, 1192362022, 1384819926, -203241730,
    -43764983, 115222306, -104785054, 61698654, -19220124, -6380865,
    13987162, -10843621, 5024799, -1077874, -294483, 278000,
    183136, -303, -1573389, 5269212, -9698904, 9975812,
    1077508, -27997454, 65666124, -94435096, 81011719, 17903518,
    -277536057, 1233296121, 1348952687, -224285746, -27873143, 107010465,
    -102732620, 63109473, -21626569, -4471181, 13022655, -10610895,
    5122391, -1217983, -216465, 253678, 206128, -69155,
    -1465887, 5244076, -10036323, 11012170, -735021, -26021181,
    65091616, -97540248, 89866765, 3012235, -261437485, 1273101162,
    1311683681, -243686639, -12263289, 98545824, -100312064, 64240114,
    -23895689, -2586860, 12029385, -10341073, 5195324, -1347379,
    -141278, 229680, 229680, -141278, -1347379, 5195324,
    -10341073, 12029385, -2586860, -23895689, 64240114, -100312064,
    98545824, -12263289, -243686639, 1311683681, 1273101162, -261437485,
    3012235, 89866765, -97540248, 65091616, -26021181, -735021,
    11012170, -10036323, 5244076, -1465887, -69155, 206128,
    253678, -216465, -1217983, 5122391, -10610895, 13022655,
    -4471181, -21626569, 63109473, -102732620, 107010465, -27873143,
    -224285746, 1348952687, 1233296121, -277536057, 17903518, 81011719,
    -94435096, 65666124, -27997454, 1077508, 9975812, -9698904,
    5269212, -1573389, -303, 183136, 278000, -294483,
    -1077874, 5024799, -10843621, 13987162, -6380865, -19220124,
    61698654, -104785054, 115222306, -43764983, -203241730, 1384819926,
    1192362022, -291984769, 32363211, 72019014, -91015502, 65966852,
    -29819644, 2844216, 8925071, -9331151, 5271386, -1669820,
    65095, 160807, 302513, -375073, -927287, 4902171,
    -11037184, 14918092, -8308524, -16683362, 60007742, -106453657,
    123143155, -59884157, -180566248, 1419200138, 1150394531, -304790608,
    46346630, 62926730, -87301241, 65998054, -31483614, 4558927,
    7864655, -8935466, 5251333, -1755171, 126884, 139235,
    327077, -457951, -766513, 4754229, -11189631, 15810653,
    -10246525, -14023983, 58037973, -107723951, 130735171, -76173852,
    -156275724, 1452011309, 1107491238, -315965051, 59811862, 53772566,
    -83312868, 65764985, -32985960, 6215816, 6799192, -8514304,
    5209861, -1829484, 184932, 118504, 351543, -542809,
    -595904, 4580800, -11299135, 16660097, -12187020, -11250353,
    55791752, -108582781, 137961006, -92575243, -130391350, 1483174908,
    1063751375, -325523968, 72719852, 44593697, -79071630, 65273858,
    -34324005, 7809431, 5733219, -8070159, 5147848, -1892849,
    239133, 98689, 375754, -629314, -415871, 4381825,
    -11364009, 17461745, -14121972, -8371491, 53272661, -109018385,
    144783968, -109027655, -102939092, 1512616121, 1019275533, -333487518,
    85034480, 35426644, -74599360, 64531805, -35495801, 9334703,
    4671161, -7605558, 5066236, -1945405, 289405, 79855,
    399547, -717109, -226885, 4157354, -11382709, 18211005,
    -16043187, -5397044, 50485474, -109020471, 151168171, -125468732,
    -73949664, 1540264069, 974165373, -339880023, 96722629, 26307149,
    -69918388, 63546828, -36500118, 10786960, 3617317, -7123042,
    4966022, -1987338, 335691, 62054, 422751, -805817,
    -29479, 3907556, -11353856, 18903398, -17942343, -2337254,
    47436156, -108580288, 157078688, -141834614, -43458497, 1566052018,
    928523337, -344729839, 107754237, 17270050, -65051436, 62327747,
    -37336434, 12161939, 2575844, -6625157, 4848253, -2018872,
    377955, 45334, 445189, -895038, 175758, 3632720,
    -11276238, 19534576, -19811024, 797069, 44131863, -107690689,
    162481706, -158060124, -11505691, 1589917574, 882452354, -348069213,
    118102343, 8349171, -60021525, 60884154, -38004928, 13455791,
    1550744, -6114447, 4714023, -2040276, 416184, 29728,
    466681, -984350, 388177, 3333255, -11148823, 20100346,
    -21640755, 3994577, 40580938, -106346191, 167344678, -174078961,
    21864052, 1611802873, 836055553, -349934124, 127743119, -422796,
    -54851877, 59226355, -38506456, 14665093, 545847, -5593437,
    4564462, -2051853, 450389, 15263, 487040, -1073315,
    607070, 3009696, -10970770, 20596692, -23423034, 7243427,
    36792897, -104543029, 171636471, -189823900, 56601503, 1631654746,
    789435970, -350364123, 136655888, -9014389, -49565819, 57365315,
    -38842541, 15786850, -435196, -5064625, 4400730, -2053941,
    480598, 1958, 506077, -1161477, 831674, 2662702,
    -10741435, 21019797, -25149369, 10531316, 32778414, -102279205,
    175327515, -205226997, 92653004, 1649424881, 742696263, -349402157,
    144823138, -17395476, -44186687, 55312601, -39015350, 16818496,
    -1388928, -4530471, 4224016, -2046911, 506859, -10181,
    523602, -1248362, 1061172, 2293059, -10460379, 21366063,
    -26811314, 13845523, 28549304, -99554530, 178389946, -220219800,
    129960574, 1665069964, 695938424, -347094385, 152230513, -25537342,
    -38737736, 53080326, -39027671, 17757900, -2312094, -3993390,
    4035524, -2031162, 529242, -21152, 539421, -1333486,
    1294694, 1901676, -10127380, 21632133, -28400504, 17172955,
    24118490, -96370657, 180797746, -234733566, 168462031, 1678551809,
    649263498, -343489991, 158866809, -33412778, -33242045, 50681083,
    -38882890, 18603359, -3201651, -3455740, 3836474, -2007119,
    547828, -30962, 553342, -1416350, 1531321, 1489591,
    -9742434, 21814910, -29908697, 20500193, 19499976, -92731117,
    182526882, -248699481, 208091131, 1689837471, 602771306, -338640982,
    164723941, -40996150, -27722434, 48127891, -38584963, 19353603,
    -4054774, -2919813, 3628091, -1975229, 562720, -39625,
    565172, -1496445, 1770085, 1057966, -9305763, 21911578,
    -31327807, 23813542, 14708811, -88641333, 183555434, -262048883,
    248777718, 1698899346, 556560173, -332601987, 169796915, -48263476,
    -22201373, 45434130, -38138391, 20007782, -4868865, -2387828,
    3411604, -1935959, 574032, -47165, 574721, -1573257,
    2009974, 608084, -8817821, 21919621, -32649942, 27099080,
    9761047, -84108641, 183863723, -274713491, 290447887, 1705715250,
    510726661, -325430042, 174083783, -55192477, -16700903, 42613482,
    -37548187, 20565467, -5641558, -1861923, 3188235, -1889792,
    581893, -53607, 581802, -1646265, 2249936, 141351,
    -8279297, 21836837, -33867443, 30342716, 4673694, -79142297,
    183434428, -286625627, 333024160, 1710268488, 465365313, -317184376,
    177585585, -61762641, -11242554, 39679866, -36819843, 21026639,
    -6370719, -1344148, 2959196, -1837228, 586444, -58988,
    586233, -1714945, 2488881, -340709, -7691120, 21661362,
    -34972924, 33530239, -535334, -73753474, 182252705, -297718453,
    376425678, 1712547900, 420568399, -307926196, 180306286, -67955260,
    -5847269, 36647380, -35959303, 21391679, -7054457, -836458,
    2725685, -1778773, 587837, -63344,
];
