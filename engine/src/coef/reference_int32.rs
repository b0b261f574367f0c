//! Polyphase stages carried over unchanged from the reference coefficient
//! tables. Tap order and scaling must not be altered.

use crate::stage::{StageDescriptor, Taps};

pub static SRC_INT32_16_21_4319_5000: StageDescriptor = StageDescriptor {
    name: "int32_16_21_4319_5000",
    input_stride: 17,
    output_stride: 13,
    subfilter_count: 16,
    subfilter_length: 92,
    block_in: 21,
    block_out: 16,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_16_21_4319_5000_FIR),
};

static SRC_INT32_16_21_4319_5000_FIR: [i32; 1472] = [
    69743, -28255, -123867, 279225, -226838, -142072,
    622543, -739488, 138464, 945737, -1634223, 1023648,
    878742, -2756585, 2761408, -140382, -3600500, 5326124,
    -2709804, -3275068, 8188561, -7179336, -634689, 10168471,
    -13300203, 5412670, 9456696, -19915603, 15481290, 3825200,
    -24785075, 29298153, -9089156, -24517771, 45458799, -31781997,
    -14236639, 61431600, -68223662, 14764766, 73627180, -131824041,
    90947625, 75520213, -327492174, 585406486, 1523536424, 493312985,
    -328864451, 102332517, 69285119, -127203698, 82977247, 2140698,
    -61839805, 64027958, -21813706, -25643354, 44710450, -28509306,
    -4159222, 27080260, -26270765, 7206196, 12968194, -19851274,
    11372821, 3276338, -12483525, 10952980, -2118093, -6186416,
    8260789, -4109501, -1874443, 5064652, -3944452, 413312,
    2432450, -2811905, 1168336, 765788, -1570656, 1054776,
    -11566, -661980, 640681, -205708, -178056, 269613,
    -140137, -10292, 76282, -46674, -104231, 283546,
    -272909, -73333, 591332, -804559, 289982, 814985,
    -1666962, 1267413, 565133, -2645574, 3042752, -702477,
    -3178907, 5487613, -3506993, -2361548, 7954135, -8047695,
    885206, 9171931, -13868538, 7475327, 7326401, -19590392,
    17727743, 319924, -22792004, 30974359, -13913843, -19985772,
    45327729, -37395459, -6254089, 57584233, -73389805, 27362766,
    62608264, -133973150, 111540313, 46021350, -319450439, 678073834,
    1513663140, 402736465, -323953371, 126082678, 46991880, -120265216,
    90518799, -10267617, -54383288, 65345110, -28846174, -19105974,
    43110431, -31891381, 779286, 24371310, -27227659, 10399372,
    10240876, -19404327, 13040888, 1108750, -11438091, 11513584,
    -3536885, -5090187, 8172145, -4850059, -1017768, 4710103,
    -4205577, 948040, 2063234, -2811653, 1428831, 499170,
    -1478254, 1140543, -157226, -573913, 645803, -263165,
    -127627, 255119, -152870, 6869, 81620, -65175,
    -81480, 282263, -315223, -711, 547258, -855512,
    439993, 664555, -1667445, 1491898, 233186, -2479858,
    3269917, -1262028, -2686494, 5544061, -4249602, -1385551,
    7559364, -8772345, 2412298, 7979595, -14173524, 9422691,
    5020538, -18876265, 19659594, -3242730, -20323216, 32068117,
    -18537241, -14993907, 44306248, -42365540, 1984607, 52538905,
    -77214099, 39688365, 50095589, -133540999, 130629800, 14275732,
    -304433447, 770345567, 1494032032, 314581580, -313217603, 146463224,
    24504731, -111200866, 96149409, -22227342, -46016940, 65379831,
    -35207640, -12301995, 40702470, -34607764, 5630931, 21230682,
    -27644865, 13345731, 7355141, -18588982, 14432306, -1047707,
    -10187618, 11842930, -4864643, -3913555, 7927049, -5484030,
    -156747, 4271060, -4380399, 1453815, 1661749, -2757026,
    1655824, 229178, -1359524, 1201976, -295799, -477316,
    638216, -313526, -76607, 236232, -161974, 22919,
    85552, -83361, -55944, 275165, -352771, 74456,
    490798, -890902, 585451, 496931, -1634854, 1692182,
    -110926, -2261531, 3437277, -1807923, -2131615, 5492395,
    -4922007, -365208, 7009290, -9336650, 3916676, 6611803,
    -14205099, 11214783, 2581731, -17781485, 21234355, -6793763,
    -17420162, 32549475, -22865831, -9632979, 42400594, -46584716,
    10322629, 46372930, -79596115, 51495356, 36297140, -130463833,
    147796485, -19217659, -282222379, 861238563, 1464872407, 229703033,
    -297179737, 163237485, 2250527, -100237574, 99804980, -33518837,
    -36917958, 64153496, -40786631, -5366620, 37545184, -36615882,
    10303337, 17725234, -27522069, 15991889, 4369054, -17426378,
    15524261, -3151492, -8759430, 11938259, -6077129, -2680610,
    7532882, -6000987, 691867, 3757591, -4467182, 1921408,
    1236444, -2650256, 1845663, -38864, -1217428, 1238514,
    -424781, -374327, 618473, -356044, -26025, 213513,
    -167438, 37586, 87891, -100821, -28028, 262156,
    -384604, 150729, 422696, -909554, 723318, 315005,
    -1569013, 1863707, -460652, -1993776, 3540273, -2329098,
    -1524024, 5331617, -5509686, 680158, 6312105, -9726858,
    5368399, 5092667, -13958422, 12814064, 55854, -16321908,
    22415923, -10263399, -14133399, 32400037, -26810483, -4002375,
    39634382, -49958407, 18598601, 39186808, -80461520, 62542395,
    21450599, -124726595, 162642618, -53906822, -252690887, 949769031,
    1426524222, 148894952, -276416855, 176241065, -19361168, -87631891,
    101460101, -43939536, -27274276, 61711264, -45488493, 1564520,
    33710737, -37887436, 14708926, 13927907, -26869394, 18291032,
    1341779, -15944063, 16300070, -5162712, -7183875, 11801386,
    -7152727, -1416139, 6999788, -6392955, 1511864, 3181019,
    -4465933, 2342517, 796061, -2494537, 1995500, -299796,
    -1055308, 1250099, -541924, -267145, 587346, -390153,
    23136, 187573, -169324, 50644, 88476, -117139,
    1794, 243258, -409859, 226599, 343956, -910597,
    850621, 122035, -1470404, 2002383, -809178, -1680831,
    3575532, -2814756, -874701, 5062872, -5999530, 1730393,
    5479037, -9932421, 6738077, 3449658, -13434047, 14186218,
    -2508828, -14520784, 23175375, -13582442, -10521740, 31613489,
    -30288259, 1791751, 36048404, -52407024, 26649645, 31102687,
    -79764006, 72597734, 5819505, -116364509, 174800213, -89193914,
    -215809321, 1034965630, 1379433348, 72881271, -251550493, 185382107,
    -39944909, -73664536, 101127684, -53307442, -17280803, 58120803,
    -49236938, 8357980, 29283241, -38408741, 18766535, 9916227,
    -25707052, 20203726, -1667576, -14175364, 16749412, -7043862,
    -5493690, 11438596, -8072818, -145132, 6340435, -6654520,
    2287877, 2553685, -4378370, 2709908, 349450, -2293949,
    2103332, -548717, -876814, 1237162, -645275, -157990,
    545809, -415475, 69957, 159066, -167768, 61913,
    87180, -131901, 32986, 218619, -427774, 300514,
    255829, -893491, 964520, -78417, -1340179, 2104678,
    -1149561, -1327920, 3540952, -3254592, -195668, 4689457,
    -6380127, 2764895, 4524184, -9946253, 7997464, 1713111,
    -12637994, 15300870, -5062569, -12408406, 23491647, -16683642,
    -6651220, 30195898, -33224133, 7638444, 31700101, -53867756,
    34314533, 22262377, -77486718, 81443878, -10311145, -105463787,
    183938663, -124443357, -171647569, 1115882538, 1324145366, 2307237,
    -223236158, 190640355, -59145590, -58634631, 98857894, -61464162,
    -7135592, 53470627, -51975205, 14885024, 24356970, -38180775,
    22402889, 5770743, -24064809, 21698569, -4601105, -12158666,
    16868440, -8760520, -3723331, 10860451, -8822096, 1107704,
    5569725, -6782893, 3005669, 1888685, -4207853, 3017532,
    -94599, -2053358, 2168017, -781079, -685827, 1200602,
    -733205, -49051, 495008, -431817, 113603, 128670,
    -162967, 71261, 83907, -144707, 64956, 188512,
    -437710, 370909, 159797, -858045, 1062365, -282546,
    -1180148, 2167702, -1474866, -941174, 3435775, -3639001,
    500239, 4216800, -6642017, 3763015, 3464282, -9764928,
    9120032, -84320, -11581719, 16132247, -7555095, -10021622,
    23352060, -19503043, -2593905, 28165777, -35552567, 13424049,
    26662700, -54296064, 41436835, 12824953, -73643143, 88882050,
    -26639812, -92161407, 189771914, -158990764, -120376486, 1191612261,
    1261297996, -62267839, -192152563, 192065080, -76643968, -42853740,
    94736406, -68277437, 2963980, 47868052, -53666839, 21024028,
    19034385, -37218941, 25553902, 1573432, -21981279, 22752689,
    -7403205, -9936587, 16659750, -10281965, -1908274, 10081520,
    -9388808, 2318421, 4704466, -6777915, 3652391, 1199604,
    -3959287, 3260626, -527528, -1778301, 2189281, -992762,
    -486374, 1141757, -804435, 57548, 436239, -439172,
    153333, 97072, -155178, 78604, 78604, -155178,
    97072, 153333, -439172, 436239, 57548, -804435,
    1141757, -486374, -992762, 2189281, -1778301, -527528,
    3260626, -3959287, 1199604, 3652391, -6777915, 4704466,
    2318421, -9388808, 10081520, -1908274, -10281965, 16659750,
    -9936587, -7403205, 22752689, -21981279, 1573432, 25553902,
    -37218941, 19034385, 21024028, -53666839, 47868052, 2963980,
    -68277437, 94736406, -42853740, -76643968, 192065080, -192152563,
    -62267839, 1261297996, 1191612261, -120376486, -158990764, 189771914,
    -92161407, -26639812, 88882050, -73643143, 12824953, 41436835,
    -54296064, 26662700, 13424049, -35552567, 28165777, -2593905,
    -19503043, 23352060, -10021622, -7555095, 16132247, -11581719,
    -84320, 9120032, -9764928, 3464282, 3763015, -6642017,
    4216800, 500239, -3639001, 3435775, -941174, -1474866,
    2167702, -1180148, -282546, 1062365, -858045, 159797,
    370909, -437710, 188512, 64956, -144707, 83907,
    71261, -162967, 128670, 113603, -431817, 495008,
    -49051, -733205, 1200602, -685827, -781079, 2168017,
    -2053358, -94599, 3017532, -4207853, 1888685, 3005669,
    -6782893, 5569725, 1107704, -8822096, 10860451, -3723331,
    -8760520, 16868440, -12158666, -4601105, 21698569, -24064809,
    5770743, 22402889, -38180775, 24356970, 14885024, -51975205,
    53470627, -7135592, -61464162, 98857894, -58634631, -59145590,
    190640355, -223236158, 2307237, 1324145366, 1115882538, -171647569,
    -124443357, 183938663, -105463787, -10311145, 81443878, -77486718,
    22262377, 34314533, -53867756, 31700101, 7638444, -33224133,
    30195898, -6651220, -16683642, 23491647, -12408406, -5062569,
    15300870, -12637994, 1713111, 7997464, -9946253, 4524184,
    2764895, -6380127, 4689457, -195668, -3254592, 3540952,
    -1327920, -1149561, 2104678, -1340179, -78417, 964520,
    -893491, 255829, 300514, -427774, 218619, 32986,
    -131901, 87180, 61913, -167768, 159066, 69957,
    -415475, 545809, -157990, -645275, 1237162, -876814,
    -548717, 2103332, -2293949, 349450, 2709908, -4378370,
    2553685, 2287877, -6654520, 6340435, -145132, -8072818,
    11438596, -5493690, -7043862, 16749412, -14175364, -1667576,
    20203726, -25707052, 9916227, 18766535, -38408741, 29283241,
    8357980, -49236938, 58120803, -17280803, -53307442, 101127684,
    -73664536, -39944909, 185382107, -251550493, 72881271, 1379433348,
    1034965630, -215809321, -89193914, 174800213, -116364509, 5819505,
    72597734, -79764006, 31102687, 26649645, -52407024, 36048404,
    1791751, -30288259, 31613489, -10521740, -13582442, 23175375,
    -14520784, -2508828, 14186218, -13434047, 3449658, 6738077,
    -9932421, 5479037, 1730393, -5999530, 5062872, -874701,
    -2814756, 3575532, -1680831, -809178, 2002383, -1470404,
    122035, 850621, -910597, 343956, 226599, -409859,
    243258, 1794, -117139, 88476, 50644, -169324,
    187573, 23136, -390153, 587346, -267145, -541924,
    1250099, -1055308, -299796, 1995500, -2494537, 796061,
    2342517, -4465933, 3181019, 1511864, -6392955, 6999788,
    -1416139, -7152727, 11801386, -7183875, -5162712, 16300070,
    -15944063, 1341779, 18291032, -26869394, 13927907, 14708926,
    -37887436, 33710737, 1564520, -45488493, 61711264, -27274276,
    -43939536, 101460101, -87631891, -19361168, 176241065, -276416855,
    148894952, 1426524222, 949769031, -252690887, -53906822, 162642618,
    -124726595, 21450599, 62542395, -80461520, 39186808, 18598601,
    -49958407, 39634382, -4002375, -26810483, 32400037, -14133399,
    -10263399, 22415923, -16321908, 55854, 12814064, -13958422,
    5092667, 5368399, -9726858, 6312105, 680158, -5509686,
    5331617, -1524024, -2329098, 3540273, -1993776, -460652,
    1863707, -1569013, 315005, 723318, -909554, 422696,
    150729, -384604, 262156, -28028, -100821, 87891,
    37586, -167438, 213513, -26025, -356044, 618473,
    -374327, -424781, 1238514, -1217428, -38864, 1845663,
    -2650256, 1236444, 1921408, -4467182, 3757591, 691867,
    -6000987, 7532882, -2680610, -6077129, 11938259, -8759430,
    -3151492, 15524261, -17426378, 4369054, 15991889, -27522069,
    17725234, 10303337, -36615882, 37545184, -5366620, -40786631,
    64153496, -36917958, -33518837, 99804980, -100237574, 2250527,
    163237485, -297179737, 229703033, 1464872407, 861238563, -282222379,
    -19217659, 147796485, -130463833, 36297140, 51495356, -79596115,
    46372930, 10322629, -46584716, 42400594, -9632979, -22865831,
    32549475, -17420162, -6793763, 21234355, -17781485, 2581731,
    11214783, -14205099, 6611803, 3916676, -9336650, 7009290,
    -365208, -4922007, 5492395, -2131615, -1807923, 3437277,
    -2261531, -110926, 1692182, -1634854, 496931, 585451,
    -890902, 490798, 74456, -352771, 275165, -55944,
    -83361, 85552, 22919, -161974, 236232, -76607,
    -313526, 638216, -477316, -295799, 1201976, -1359524,
    229178, 1655824, -2757026, 1661749, 1453815, -4380399,
    4271060, -156747, -5484030, 7927049, -3913555, -4864643,
    11842930, -10187618, -1047707, 14432306, -18588982, 7355141,
    13345731, -27644865, 21230682, 5630931, -34607764, 40702470,
    -12301995, -35207640, 65379831, -46016940, -22227342, 96149409,
    -111200866, 24504731, 146463224, -313217603, 314581580, 1494032032,
    770345567, -304433447, 14275732, 130629800, -133540999, 50095589,
    39688365, -77214099, 52538905, 1984607, -42365540, 44306248,
    -14993907, -18537241, 32068117, -20323216, -3242730, 19659594,
    -18876265, 5020538, 9422691, -14173524, 7979595, 2412298,
    -8772345, 7559364, -1385551, -4249602, 5544061, -2686494,
    -1262028, 3269917, -2479858, 233186, 1491898, -1667445,
    664555, 439993, -855512, 547258, -711, -315223,
    282263, -81480, -65175, 81620, 6869, -152870,
    255119, -127627, -263165, 645803, -573913, -157226,
    1140543, -1478254, 499170, 1428831, -2811653, 2063234,
    948040, -4205577, 4710103, -1017768, -4850059, 8172145,
    -5090187, -3536885, 11513584, -11438091, 1108750, 13040888,
    -19404327, 10240876, 10399372, -27227659, 24371310, 779286,
    -31891381, 43110431, -19105974, -28846174, 65345110, -54383288,
    -10267617, 90518799, -120265216, 46991880, 126082678, -323953371,
    402736465, 1513663140, 678073834, -319450439, 46021350, 111540313,
    -133973150, 62608264, 27362766, -73389805, 57584233, -6254089,
    -37395459, 45327729, -19985772, -13913843, 30974359, -22792004,
    319924, 17727743, -19590392, 7326401, 7475327, -13868538,
    9171931, 885206, -8047695, 7954135, -2361548, -3506993,
    5487613, -3178907, -702477, 3042752, -2645574, 565133,
    1267413, -1666962, 814985, 289982, -804559, 591332,
    -73333, -272909, 283546, -104231, -46674, 76282,
    -10292, -140137, 269613, -178056, -205708, 640681,
    -661980, -11566, 1054776, -1570656, 765788, 1168336,
    -2811905, 2432450, 413312, -3944452, 5064652, -1874443,
    -4109501, 8260789, -6186416, -2118093, 10952980, -12483525,
    3276338, 11372821, -19851274, 12968194, 7206196, -26270765,
    27080260, -4159222, -28509306, 44710450, -25643354, -21813706,
    64027958, -61839805, 2140698, 82977247, -127203698, 69285119,
    102332517, -328864451, 493312985, 1523536424, 585406486, -327492174,
    75520213, 90947625, -131824041, 73627180, 14764766, -68223662,
    61431600, -14236639, -31781997, 45458799, -24517771, -9089156,
    29298153, -24785075, 3825200, 15481290, -19915603, 9456696,
    5412670, -13300203, 10168471, -634689, -7179336, 8188561,
    -3275068, -2709804, 5326124, -3600500, -140382, 2761408,
    -2756585, 878742, 1023648, -1634223, 945737, 138464,
    -739488, 622543, -142072, -226838, 279225, -123867,
    -28255, 69743,
];

pub static SRC_INT32_16_21_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_16_21_4535_5000",
    input_stride: 17,
    output_stride: 13,
    subfilter_count: 16,
    subfilter_length: 128,
    block_in: 21,
    block_out: 16,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_16_21_4535_5000_FIR),
};

static SRC_INT32_16_21_4535_5000_FIR: [i32; 2048] = [
    66387, -68365, -7975, 136343, -214865, 132911,
    119132, -389975, 438757, -122923, -429393, 828925,
    -674441, -99073, 1049270, -1439838, 773191, 718822,
    -2055760, 2109591, -491857, -1934203, 3434867, -2590106,
    -489952, 3894252, -5020683, 2484911, 2521661, -6621792,
    6445772, -1266323, -5907199, 9934198, -7114746, -1678474,
    10818940, -13377253, 6200970, 6991002, -17223048, 16176583,
    -2639876, -15319458, 24843154, -17179406, -4967622, 27430927,
    -33190776, 14667419, 18807835, -44740280, 41705282, -5570450,
    -43712802, 71445565, -50172969, -18479665, 96941792, -126990568,
    61008442, 108115273, -337882355, 565469635, 1558804125, 469507748,
    -334458898, 132825574, 37212050, -117679328, 102612256, -31153014,
    -40168655, 69670990, -49437233, 2486071, 36873768, -45604773,
    23801730, 9448110, -31130147, 29339803, -8986671, -13968864,
    24385955, -17489313, 357371, 14412024, -17643845, 8994589,
    4148096, -12607048, 11630972, -3304245, -5849629, 9786875,
    -6793438, -83526, 5774244, -6806495, 3298840, 1714595,
    -4747829, 4203503, -1077867, -2149208, 3392544, -2239334,
    -101600, 1897722, -2118038, 956950, 547329, -1364458,
    1135882, -254572, -563551, 819425, -499801, -38057,
    395343, -401688, 161279, 95850, -203154, 147275,
    -25886, -56994, 66498, -78756, 10766, 122184,
    -222435, 168232, 73416, -369885, 474079, -207093,
    -348657, 821507, -773526, 61297, 939541, -1486868,
    986843, 462161, -1950302, 2281295, -877653, -1585105,
    3407323, -2983779, 115656, 3501272, -5194076, 3213709,
    1683578, -6299363, 6993080, -2436566, -4890235, 9879894,
    -8248000, -1006, 9777064, -13881970, 8148397, 4823755,
    -16445792, 17628596, -5614051, -12813972, 24797247, -20072539,
    -804112, 24940455, -34595627, 19646423, 13370206, -42949812,
    45745705, -13623073, -37009358, 71784073, -59322461, -5179785,
    89151450, -133932248, 84324738, 80081034, -334435403, 662397449,
    1548239836, 375530678, -324645315, 153878137, 13415800, -106243454,
    106096112, -42958386, -29524696, 66518332, -54081541, 10384140,
    31358651, -45537089, 28256247, 4096633, -28462582, 30634745,
    -12781526, -10509142, 23440083, -19283078, 3316812, 12373810,
    -17703302, 10795639, 2032413, -11589699, 12199126, -4845953,
    -4479673, 9443093, -7532445, 1087736, 4993505, -6851326,
    4000094, 918859, -4382261, 4423814, -1636411, -1670636,
    3282153, -2494927, 285151, 1650566, -2136526, 1172007,
    314029, -1262729, 1198018, -402134, -443325, 793527,
    -558661, 45767, 344899, -404985, 199088, 57852,
    -187662, 154858, -42626, -44920, 65170, -87900,
    29968, 104992, -225579, 201024, 24994, -341634,
    500389, -288804, -259051, 796990, -858537, 223315,
    808552, -1504104, 1183685, 191956, -1803172, 2408706,
    -1250996, -1198594, 3309524, -3321519, 726762, 3031560,
    -5263219, 3885547, 801037, -5844203, 7403533, -3570150,
    -3761912, 9622865, -9224775, 1694387, 8524231, -14108096,
    9949452, 2535474, -15324296, 18735160, -8504118, -10020594,
    24243928, -22585795, 3420325, 21912948, -35308703, 24280658,
    7594666, -40258527, 48902288, -21507313, -29449402, 70656801,
    -67415568, 8487832, 79352120, -138300380, 106674762, 49133364,
    -323721951, 759238249, 1527240287, 284509629, -308996500, 171018928,
    -9914760, -92963114, 107371160, -53676116, -18465387, 62072256,
    -57567731, 17966764, 25279812, -44549883, 32087729, -1277429,
    -25248640, 31296167, -16277823, -6872800, 22029705, -20668312,
    6178953, 10105973, -17403902, 12359772, -102610, -10348362,
    12514451, -6273275, -3033736, 8911942, -8110878, 2223877,
    4120604, -6756996, 4612119, 114124, -3932523, 4551841,
    -2154649, -1164578, 3106852, -2696492, 660610, 1373648,
    -2111510, 1359997, 78138, -1137151, 1234841, -538909,
    -316376, 752076, -605013, 126870, 288610, -399999,
    231899, 19719, -168815, 159043, -57890, -32423,
    62365, -95549, 49235, 85033, -224100, 230531,
    -25192, -305615, 516936, -366308, -162250, 755546,
    -927450, 383667, 658636, -1490687, 1359389, -86445,
    -1616763, 2488552, -1604035, -782085, 3142519, -3595650,
    1330901, 2493776, -5225401, 4485962, -108407, -5264088,
    7667154, -4643452, -2544094, 9166157, -10023394, 3373208,
    7083843, -14048092, 11565782, 171699, -13877942, 19470098,
    -11250134, -6993437, 23189216, -24663812, 7620018, 18404417,
    -35307729, 28471500, 1595187, -36710264, 51099097, -29059861,
    -21174658, 68063347, -74268638, 22251908, 67697610, -139936962,
    127575513, 15755021, -305438558, 854919354, 1496061653, 197355336,
    -288131413, 184075309, -32337033, -78147479, 106459236, -63112248,
    -7219540, 56442010, -59842147, 25085386, 18766959, -42674178,
    35226056, -6565269, -21559249, 31317489, -19408016, -3135214,
    20188132, -21621172, 8886874, 7656745, -16755367, 13657759,
    -2213556, -8910489, 12573213, -7558525, -1541905, 8206211,
    -8518795, 3302284, 3174268, -6527028, 5123577, -683206,
    -3408759, 4586153, -2622604, -641647, 2871068, -2840697,
    1017333, 1073016, -2044155, 1517531, -155522, -990666,
    1246042, -662318, -185404, 696215, -638170, 203661,
    227752, -387029, 259170, -17767, -147101, 159855,
    -71416, -19782, 58073, -101475, 68159, 62640,
    -217892, 256043, -76138, -262391, 523154, -437908,
    -60111, 697699, -978541, 539014, 492555, -1446380,
    1509997, -367440, -1394310, 2518486, -1929226, -343712,
    2908796, -3799704, 1915589, 1898086, -5080072, 5001785,
    -1026438, -4569444, 7776863, -5633815, -1260719, 8516934,
    -10625592, 5000932, 5483389, -13700192, 12962411, -2220014,
    -12132957, 19814561, -13794481, -3791954, 21649435, -26259535,
    11708887, 14481306, -34584755, 32128243, -4508343, -32366873,
    52278769, -36121923, -12343478, 64033096, -79719949, 35833884,
    54382521, -138734255, 146556461, -19504816, -279381595, 948363084,
    1455083534, 114906353, -262721760, 192956244, -53438986, -62128081,
    103424866, -71101885, 3984138, 49758878, -60876211, 31602750,
    11956904, -39958528, 37615897, -11661040, -17474162, 30705130,
    -22112668, 626975, 17957054, -22126804, 11387357, 5077536,
    -15774384, 14666053, -4257946, -7307228, 12376910, -8677189,
    -34877, 7342087, -8749816, 4301769, 2174494, -6167654,
    5525301, -1457074, -2822489, 4527238, -3031450, -112656,
    2580398, -2925419, 1348364, 755108, -1936468, 1641895,
    -382251, -826594, 1231838, -770099, -53142, 627360,
    -657730, 274674, 163665, -366530, 280487, -53860,
    -123047, 157386, -82987, -7267, 52320, -105481,
    86322, 38209, -206947, 276918, -126801, -212690,
    518680, -501990, 45359, 624326, -1010418, 686058,
    313453, -1371579, 1631998, -645289, -1139841, 2497158,
    -2219486, 107825, 2612245, -3928564, 2468581, 1255975,
    -4828883, 5421416, -1934349, -3773166, 7728653, -6520028,
    62667, 7686383, -11016928, 6543710, 3753919, -13068502,
    14108497, -4591047, -10121942, 19757486, -16083071, -479774,
    19650990, -27335266, 15602195, 10219246, -33146484, 35170039,
    -10592487, -27307186, 52403924, -42542500, -3127870, 58625094,
    -83633341, 48953360, 39639284, -134638196, 163168888, -56037654,
    -245452984, 1038501734, 1404803435, 37918558, -233480100, 197651108,
    -72846013, -45251901, 98373127, -77511916, 14921575, 42173226,
    -60666633, 37395506, 4990720, -36467827, 39217653, -16463956,
    -13080251, 29478244, -24341565, 4337425, 15385608, -22179551,
    13631922, 2421865, -14484201, 15367215, -6195083, -5572751,
    11932189, -9608385, 1456675, 6338787, -8801217, 5202980,
    1142137, -5687654, 5810455, -2192093, -2186356, 4377465,
    -3373669, 411600, 2241474, -2949772, 1647363, 426620,
    -1791244, 1731089, -597567, -648555, 1192959, -860348,
    77705, 547163, -663575, 338590, 97725, -339101,
    295568, -87859, -97216, 151794, -92435, 4864,
    45164, -107402, 103310, 12192, -191355, 292592,
    -176114, -157392, 503366, -557065, 152045, 536642,
    -1022065, 821615, 124798, -1267316, 1722421, -914225,
    -858103, 2424253, -2468354, 563439, 2258102, -3978591,
    2978122, 580025, -4475675, 5735094, -2813416, -2890384,
    7521706, -7282775, 1399415, 6689523, -11187125, 7969072,
    1929455, -12162978, 14978002, -6892704, -7883274, 19295908,
    -18066484, 2876552, 17229933, -27863528, 19218290, 5701613,
    -31014289, 37527658, -16532736, -21625618, 51458183, -48181565,
    6289781, 51927324, -85901417, 61333686, 23734382, -127650862,
    176995077, -93183996, -203664402, 1124292532, 1345829549, -32943962,
    -201147569, 198227155, -90226923, -27874312, 91446768, -82243067,
    25377717, 33851217, -59235129, 42356498, -1989143, -32281808,
    40008077, -20880269, -8469677, 27668194, -26054639, 7921632,
    12529308, -21782976, 15577761, -255749, -12914084, 15750202,
    -7986863, -3743533, 11250661, -10335249, 2902719, 5218140,
    -8673941, 5988772, 98473, -5098152, 5974648, -2873848,
    -1513860, 4141017, -3643194, 920566, 1861817, -2914105,
    1908735, 94362, -1611996, 1783858, -797292, -460391,
    1130623, -931552, 204508, 457474, -655867, 394265,
    31316, -305467, 304266, -119129, -70191, 143298,
    -99641, 16375, 36698, -107116, 118720, -14911,
    -171311, 302596, -223015, -97517, 477288, -601799,
    257762, 436180, -1012863, 942682, -69686, -1135247,
    1778893, -1168573, -554478, 2300509, -2670125, 1013828,
    1852857, -3947716, 3433200, -116331, -4026432, 5935109,
    -3645287, -1938174, 7158447, -7905052, 2722308, 5544945,
    -11130320, 9246608, 46318, -10999280, 15550273, -9077204,
    -5460379, 18435099, -19701029, 6208883, 14431326, -27827740,
    22480309, 1017914, -28223949, 39145032, -22206025, -15430437,
    49446772, -52913058, 15720261, 44055396, -86448205, 72707575,
    6963832, -117831915, 187657196, -130242727, -154139849, 1204732349,
    1278871952, -97116523, -166481442, 194825711, -105298980, -10352025,
    82822645, -85231250, 35150649, 24971258, -56627637, 46396701,
    -8841739, -27493264, 39980551, -24825079, -3737975, 25317792,
    -27222665, 11308417, 9448862, -20949695, 17188546, -2900896,
    -11098670, 15810526, -9598516, -1857587, 10348608, -10845235,
    4274467, 4004114, -8372543, 6644533, -935237, -4412360,
    6015992, -3489179, -819069, 3823779, -3835507, 1404137,
    1449671, -2819981, 2127725, -234879, -1402875, 1799705,
    -977632, -266087, 1046501, -982614, 324772, 360300,
    -635044, 440746, -34202, -266464, 306569, -147106,
    -42562, 132167, -104540, 27049, 27049, -104540,
    132167, -42562, -147106, 306569, -266464, -34202,
    440746, -635044, 360300, 324772, -982614, 1046501,
    -266087, -977632, 1799705, -1402875, -234879, 2127725,
    -2819981, 1449671, 1404137, -3835507, 3823779, -819069,
    -3489179, 6015992, -4412360, -935237, 6644533, -8372543,
    4004114, 4274467, -10845235, 10348608, -1857587, -9598516,
    15810526, -11098670, -2900896, 17188546, -20949695, 9448862,
    11308417, -27222665, 25317792, -3737975, -24825079, 39980551,
    -27493264, -8841739, 46396701, -56627637, 24971258, 35150649,
    -85231250, 82822645, -10352025, -105298980, 194825711, -166481442,
    -97116523, 1278871952, 1204732349, -154139849, -130242727, 187657196,
    -117831915, 6963832, 72707575, -86448205, 44055396, 15720261,
    -52913058, 49446772, -15430437, -22206025, 39145032, -28223949,
    1017914, 22480309, -27827740, 14431326, 6208883, -19701029,
    18435099, -5460379, -9077204, 15550273, -10999280, 46318,
    9246608, -11130320, 5544945, 2722308, -7905052, 7158447,
    -1938174, -3645287, 5935109, -4026432, -116331, 3433200,
    -3947716, 1852857, 1013828, -2670125, 2300509, -554478,
    -1168573, 1778893, -1135247, -69686, 942682, -1012863,
    436180, 257762, -601799, 477288, -97517, -223015,
    302596, -171311, -14911, 118720, -107116, 36698,
    16375, -99641, 143298, -70191, -119129, 304266,
    -305467, 31316, 394265, -655867, 457474, 204508,
    -931552, 1130623, -460391, -797292, 1783858, -1611996,
    94362, 1908735, -2914105, 1861817, 920566, -3643194,
    4141017, -1513860, -2873848, 5974648, -5098152, 98473,
    5988772, -8673941, 5218140, 2902719, -10335249, 11250661,
    -3743533, -7986863, 15750202, -12914084, -255749, 15577761,
    -21782976, 12529308, 7921632, -26054639, 27668194, -8469677,
    -20880269, 40008077, -32281808, -1989143, 42356498, -59235129,
    33851217, 25377717, -82243067, 91446768, -27874312, -90226923,
    198227155, -201147569, -32943962, 1345829549, 1124292532, -203664402,
    -93183996, 176995077, -127650862, 23734382, 61333686, -85901417,
    51927324, 6289781, -48181565, 51458183, -21625618, -16532736,
    37527658, -31014289, 5701613, 19218290, -27863528, 17229933,
    2876552, -18066484, 19295908, -7883274, -6892704, 14978002,
    -12162978, 1929455, 7969072, -11187125, 6689523, 1399415,
    -7282775, 7521706, -2890384, -2813416, 5735094, -4475675,
    580025, 2978122, -3978591, 2258102, 563439, -2468354,
    2424253, -858103, -914225, 1722421, -1267316, 124798,
    821615, -1022065, 536642, 152045, -557065, 503366,
    -157392, -176114, 292592, -191355, 12192, 103310,
    -107402, 45164, 4864, -92435, 151794, -97216,
    -87859, 295568, -339101, 97725, 338590, -663575,
    547163, 77705, -860348, 1192959, -648555, -597567,
    1731089, -1791244, 426620, 1647363, -2949772, 2241474,
    411600, -3373669, 4377465, -2186356, -2192093, 5810455,
    -5687654, 1142137, 5202980, -8801217, 6338787, 1456675,
    -9608385, 11932189, -5572751, -6195083, 15367215, -14484201,
    2421865, 13631922, -22179551, 15385608, 4337425, -24341565,
    29478244, -13080251, -16463956, 39217653, -36467827, 4990720,
    37395506, -60666633, 42173226, 14921575, -77511916, 98373127,
    -45251901, -72846013, 197651108, -233480100, 37918558, 1404803435,
    1038501734, -245452984, -56037654, 163168888, -134638196, 39639284,
    48953360, -83633341, 58625094, -3127870, -42542500, 52403924,
    -27307186, -10592487, 35170039, -33146484, 10219246, 15602195,
    -27335266, 19650990, -479774, -16083071, 19757486, -10121942,
    -4591047, 14108497, -13068502, 3753919, 6543710, -11016928,
    7686383, 62667, -6520028, 7728653, -3773166, -1934349,
    5421416, -4828883, 1255975, 2468581, -3928564, 2612245,
    107825, -2219486, 2497158, -1139841, -645289, 1631998,
    -1371579, 313453, 686058, -1010418, 624326, 45359,
    -501990, 518680, -212690, -126801, 276918, -206947,
    38209, 86322, -105481, 52320, -7267, -82987,
    157386, -123047, -53860, 280487, -366530, 163665,
    274674, -657730, 627360, -53142, -770099, 1231838,
    -826594, -382251, 1641895, -1936468, 755108, 1348364,
    -2925419, 2580398, -112656, -3031450, 4527238, -2822489,
    -1457074, 5525301, -6167654, 2174494, 4301769, -8749816,
    7342087, -34877, -8677189, 12376910, -7307228, -4257946,
    14666053, -15774384, 5077536, 11387357, -22126804, 17957054,
    626975, -22112668, 30705130, -17474162, -11661040, 37615897,
    -39958528, 11956904, 31602750, -60876211, 49758878, 3984138,
    -71101885, 103424866, -62128081, -53438986, 192956244, -262721760,
    114906353, 1455083534, 948363084, -279381595, -19504816, 146556461,
    -138734255, 54382521, 35833884, -79719949, 64033096, -12343478,
    -36121923, 52278769, -32366873, -4508343, 32128243, -34584755,
    14481306, 11708887, -26259535, 21649435, -3791954, -13794481,
    19814561, -12132957, -2220014, 12962411, -13700192, 5483389,
    5000932, -10625592, 8516934, -1260719, -5633815, 7776863,
    -4569444, -1026438, 5001785, -5080072, 1898086, 1915589,
    -3799704, 2908796, -343712, -1929226, 2518486, -1394310,
    -367440, 1509997, -1446380, 492555, 539014, -978541,
    697699, -60111, -437908, 523154, -262391, -76138,
    256043, -217892, 62640, 68159, -101475, 58073,
    -19782, -71416, 159855, -147101, -17767, 259170,
    -387029, 227752, 203661, -638170, 696215, -185404,
    -662318, 1246042, -990666, -155522, 1517531, -2044155,
    1073016, 1017333, -2840697, 2871068, -641647, -2622604,
    4586153, -3408759, -683206, 5123577, -6527028, 3174268,
    3302284, -8518795, 8206211, -1541905, -7558525, 12573213,
    -8910489, -2213556, 13657759, -16755367, 7656745, 8886874,
    -21621172, 20188132, -3135214, -19408016, 31317489, -21559249,
    -6565269, 35226056, -42674178, 18766959, 25085386, -59842147,
    56442010, -7219540, -63112248, 106459236, -78147479, -32337033,
    184075309, -288131413, 197355336, 1496061653, 854919354, -305438558,
    15755021, 127575513, -139936962, 67697610, 22251908, -74268638,
    68063347, -21174658, -29059861, 51099097, -36710264, 1595187,
    28471500, -35307729, 18404417, 7620018, -24663812, 23189216,
    -6993437, -11250134, 19470098, -13877942, 171699, 11565782,
    -14048092, 7083843, 3373208, -10023394, 9166157, -2544094,
    -4643452, 7667154, -5264088, -108407, 4485962, -5225401,
    2493776, 1330901, -3595650, 3142519, -782085, -1604035,
    2488552, -1616763, -86445, 1359389, -1490687, 658636,
    383667, -927450, 755546, -162250, -366308, 516936,
    -305615, -25192, 230531, -224100, 85033, 49235,
    -95549, 62365, -32423, -57890, 159043, -168815,
    19719, 231899, -399999, 288610, 126870, -605013,
    752076, -316376, -538909, 1234841, -1137151, 78138,
    1359997, -2111510, 1373648, 660610, -2696492, 3106852,
    -1164578, -2154649, 4551841, -3932523, 114124, 4612119,
    -6756996, 4120604, 2223877, -8110878, 8911942, -3033736,
    -6273275, 12514451, -10348362, -102610, 12359772, -17403902,
    10105973, 6178953, -20668312, 22029705, -6872800, -16277823,
    31296167, -25248640, -1277429, 32087729, -44549883, 25279812,
    17966764, -57567731, 62072256, -18465387, -53676116, 107371160,
    -92963114, -9914760, 171018928, -308996500, 284509629, 1527240287,
    759238249, -323721951, 49133364, 106674762, -138300380, 79352120,
    8487832, -67415568, 70656801, -29449402, -21507313, 48902288,
    -40258527, 7594666, 24280658, -35308703, 21912948, 3420325,
    -22585795, 24243928, -10020594, -8504118, 18735160, -15324296,
    2535474, 9949452, -14108096, 8524231, 1694387, -9224775,
    9622865, -3761912, -3570150, 7403533, -5844203, 801037,
    3885547, -5263219, 3031560, 726762, -3321519, 3309524,
    -1198594, -1250996, 2408706, -1803172, 191956, 1183685,
    -1504104, 808552, 223315, -858537, 796990, -259051,
    -288804, 500389, -341634, 24994, 201024, -225579,
    104992, 29968, -87900, 65170, -44920, -42626,
    154858, -187662, 57852, 199088, -404985, 344899,
    45767, -558661, 793527, -443325, -402134, 1198018,
    -1262729, 314029, 1172007, -2136526, 1650566, 285151,
    -2494927, 3282153, -1670636, -1636411, 4423814, -4382261,
    918859, 4000094, -6851326, 4993505, 1087736, -7532445,
    9443093, -4479673, -4845953, 12199126, -11589699, 2032413,
    10795639, -17703302, 12373810, 3316812, -19283078, 23440083,
    -10509142, -12781526, 30634745, -28462582, 4096633, 28256247,
    -45537089, 31358651, 10384140, -54081541, 66518332, -29524696,
    -42958386, 106096112, -106243454, 13415800, 153878137, -324645315,
    375530678, 1548239836, 662397449, -334435403, 80081034, 84324738,
    -133932248, 89151450, -5179785, -59322461, 71784073, -37009358,
    -13623073, 45745705, -42949812, 13370206, 19646423, -34595627,
    24940455, -804112, -20072539, 24797247, -12813972, -5614051,
    17628596, -16445792, 4823755, 8148397, -13881970, 9777064,
    -1006, -8248000, 9879894, -4890235, -2436566, 6993080,
    -6299363, 1683578, 3213709, -5194076, 3501272, 115656,
    -2983779, 3407323, -1585105, -877653, 2281295, -1950302,
    462161, 986843, -1486868, 939541, 61297, -773526,
    821507, -348657, -207093, 474079, -369885, 73416,
    168232, -222435, 122184, 10766, -78756, 66498,
    -56994, -25886, 147275, -203154, 95850, 161279,
    -401688, 395343, -38057, -499801, 819425, -563551,
    -254572, 1135882, -1364458, 547329, 956950, -2118038,
    1897722, -101600, -2239334, 3392544, -2149208, -1077867,
    4203503, -4747829, 1714595, 3298840, -6806495, 5774244,
    -83526, -6793438, 9786875, -5849629, -3304245, 11630972,
    -12607048, 4148096, 8994589, -17643845, 14412024, 357371,
    -17489313, 24385955, -13968864, -8986671, 29339803, -31130147,
    9448110, 23801730, -45604773, 36873768, 2486071, -49437233,
    69670990, -40168655, -31153014, 102612256, -117679328, 37212050,
    132825574, -334458898, 469507748, 1558804125, 565469635, -337882355,
    108115273, 61008442, -126990568, 96941792, -18479665, -50172969,
    71445565, -43712802, -5570450, 41705282, -44740280, 18807835,
    14667419, -33190776, 27430927, -4967622, -17179406, 24843154,
    -15319458, -2639876, 16176583, -17223048, 6991002, 6200970,
    -13377253, 10818940, -1678474, -7114746, 9934198, -5907199,
    -1266323, 6445772, -6621792, 2521661, 2484911, -5020683,
    3894252, -489952, -2590106, 3434867, -1934203, -491857,
    2109591, -2055760, 718822, 773191, -1439838, 1049270,
    -99073, -674441, 828925, -429393, -122923, 438757,
    -389975, 119132, 132911, -214865, 136343, -7975,
    -68365, 66387,
];

pub static SRC_INT32_21_16_4319_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_16_4319_5000",
    input_stride: 3,
    output_stride: 4,
    subfilter_count: 21,
    subfilter_length: 76,
    block_in: 16,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_16_4319_5000_FIR),
};

static SRC_INT32_21_16_4319_5000_FIR: [i32; 1596] = [
    -50136, 105527, -181643, 273767, -370546, 452739,
    -492719, 455060, -298466, -20800, 543985, -1303606,
    2316267, -3575139, 5042812, -6645386, 8268666, -9757263,
    10917264, -11522850, 11326924, -10075426, 7524601, -3460108,
    -2283466, 9804349, -19118353, 30148435, -42720670, 56568151,
    -71344292, 86647632, -102062496, 117227465, -131969693, 146649758,
    -163455919, 195460608, 1999639672, 95676054, -117160251, 119581826,
    -115382123, 107427387, -97018691, 85033984, -72192230, 59121304,
    -46369025, 34396879, -23570529, 14152927, -6302486, 77060,
    4556530, -7708351, 9547939, -10285150, 10150859, -9378942,
    8190749, -6782899, 5318901, -3924671, 2687707, -1659390,
    859676, -283364, -92907, 303693, -388428, 386227,
    -332042, 254258, -173642, 103406, -49012, 105542,
    -186283, 288505, -402968, 512338, -590279, 601539,
    -503375, 248496, 210374, -914434, 1891557, -3148358,
    4662306, -6374692, 8185369, -9950140, 11481545, -12553572,
    12910502, -12279729, 10387938, -6979656, 1836750, 5202846,
    -14229144, 25249007, -38182311, 52868091, -69084561, 86589884,
    -105199040, 124937087, -146392741, 171738560, -208826248, 301535426,
    1986682749, 3028921, -70811749, 91104223, -96999140, 95768196,
    -90199729, 81808113, -71634190, 60495419, -49069783, 37921472,
    -27505749, 18168062, -10144043, 3563226, 1542601, -5226639,
    7610857, -8867572, 9200335, -8825512, 7955839, -6786897,
    5487130, -4191654, 2999742, -1975590, 1151718, -534257,
    109289, 150516, -279636, 314322, -288422, 230551,
    -162589, 99337, -46700, 103332, -187305, 297978,
    -428430, 563600, -678950, 740068, -703535, 519331,
    -134945, -498869, 1420891, -2651258, 4182955, -5973784,
    7939743, -9950725, 11829390, -13353868, 14264645, -14275614,
    13088873, -10412336, 5978842, 435019, -8992500, 19785236,
    -32829776, 48076138, -65434663, 84833096, -106330755, 130360314,
    -158314075, 194297009, -252373651, 412950151, 1960920376, -81746345,
    -25245209, 61794025, -77214189, 82511565, -81769112, 77059062,
    -69702893, 60681523, -50784431, 40664329, -30855176, 21776785,
    -13736354, 6931711, -1458260, -2679947, 5555493, -7300285,
    8086980, -8110530, 7571132, -6659645, 5546214, -4372494,
    3247515, -2246908, 1414970, -768880, 304276, -1442,
    -168593, 238601, -240723, 203279, -148846, 93510,
    -43166, 98817, -184522, 301778, -446169, 605220,
    -756690, 867660, -894834, 786359, -485385, -64576,
    912645, -2092297, 3612383, -5448251, 7533854, -9755841,
    11950516, -13904463, 15359321, -16020863, 15572098, -13689621,
    10061948, -4408066, -3506079, 13856029, -26755911, 42269456,
    -60443679, 81382222, -105397135, 133341118, -167435579, 213802714,
    -293188812, 528662376, 1922653383, -158035772, 18754012, 32225459,
    -56437212, 67943965, -71918069, 70903557, -66456917, 59693636,
    -51494011, 42583451, -33562235, 24914986, -17013449, 10119048,
    -4388213, -118471, 3423364, -5615898, 6834904, -7250467,
    7046606, -6405911, 5497004, -4465335, 3427512, -2469030,
    1644967, -983063, 488446, -149254, -57533, 160666,
    -190025, 173122, -132810, 86144, -38404, 91969,
    -177817, 299604, -455548, 636051, -821617, 981466,
    -1073236, 1044179, -834110, 380246, 376106, -1481316,
    2960162, -4806241, 6972964, -9366113, 11838943, -14190692,
    16169147, -17477556, 17785782, -16745065, 14005229, -9232595,
    2126203, 7570808, -20069013, 35546194, -54187629, 76275276,
    -102376604, 133767224, -173504825, 229772504, -330364552, 647550271,
    1872327768, -225351771, 60460653, 2959779, -35086679, 52370769,
    -60861425, 63483314, -61979181, 57568160, -51199201, 43653318,
    -35583533, 27528528, -19916364, 13066158, -7191616, 2408038,
    1256854, -3848791, 5470524, -6264336, 6394779, -6032835,
    5342443, -4470066, 3537609, -2638691, 1837988, -1173131,
    658490, -290156, 51379, 82112, -137429, 140793,
    -114910, 77478, -32435, 82805, -167149, 291263,
    -456085, 655125, -872055, 1078837, -1234859, 1287450,
    -1174164, 827011, -178690, -829378, 2237651, -4058347,
    6265479, -8786012, 11493172, -14202865, 16673958, -18612889,
    19682641, -19515631, 17729455, -13943807, 7796113, 1047516,
    -12890945, 28023886, -46768417, 69583162, -97287671, 131573202,
    -176320994, 241772420, -363010001, 768426526, 1810528484, -283337122,
    99218982, -25464370, -13581656, 36110132, -48833101, 54961926,
    -56374977, 54362851, -49920024, 43865153, -36889517, 29574157,
    -22394185, 15719438, -9816064, 4851223, -901614, -2034420,
    4022017, -5173283, 5630430, -5549743, 5087459, -4388290,
    3577080, -2753712, 1991117, -1335964, 811462, -421591,
    156080, 4496, -84038, 107019, -95592, 67764,
    -25312, 71398, -152562, 276683, -447457, 661686,
    -906567, 1157385, -1376061, 1510993, -1498610, 1266915,
    -741142, -148568, 1457806, -3217436, 5422839, -8023831,
    10916290, -13936531, 16859281, -19399886, 21220928, -21942979,
    21158579, -18447835, 13393163, -5589565, -5354949, 19837454,
    -38312268, 61408863, -90189329, 126742735, -175739990, 249427133,
    -390264861, 890053399, 1737971303, -331767016, 134450889, -52539934,
    7665968, 19486749, -36081332, 45521382, -49769609, 50155399,
    -47695193, 43226850, -37464857, 31020188, -24404922, 18031718,
    -12213362, 7165047, -3010409, -208614, 2518742, -4000144,
    4770264, -4967935, 4738843, -4223259, 3546588, -2813026,
    2102278, -1469050, 944820, -541258, 254651, -70692,
    -30929, 72527, -75310, 57265, -17117, 57870,
    -134185, 255919, -429521, 655204, -923999, 1215032,
    -1493513, 1709897, -1800666, 1691106, -1300286, 548227,
    634955, -2298436, 4459341, -7091586, 10115983, -13392647,
    16716703, -19818020, 22365337, -23974675, 24221271, -22653562,
    18806738, -12212156, 2396785, 11136845, -28967663, 51886004,
    -81180700, 119310006, -171678627, 252428616, -411313524, 1011158663,
    1655492889, -370549136, 165662533, -77799634, 28258940, 2825612,
    -22863692, 35358288, -42305686, 45041638, -44581091, 41762598,
    -37308540, 31846959, -25916198, 19963083, -14340398, 9306644,
    -5029480, 1593128, 990659, -2768969, 3832566, -4300422,
    4305074, -3979777, 3448142, -2816670, 2170259, -1570515,
    1056471, -647148, 345350, -142059, 20863, 38030,
    -54519, 46245, -7965, 42398, -112229, 229158,
    -402317, 635400, -923507, 1250064, -1584283, 1879632,
    -2073843, 2090855, -1845003, 1247557, -215463, -1318082,
    3391906, -6004839, 9104452, -12577642, 16244128, -19853703,
    23087783, -25565303, 26852386, -26474434, 23928257, -18690427,
    10215765, 2084332, -18902807, 41176791, -70399890, 109360162,
    -164117799, 250543891, -425398828, 1130452224, 1564039215, -399721803,
    192449463, -100823241, 47821674, -13554117, -9442044, 24679875,
    -34140121, 39133444, -40650444, 39512185, -36433695, 32047045,
    -26905737, 21481547, -16159902, 11237109, -6921112, 3336316,
    -532268, -1504541, 2836808, -3561650, 3796130, -3664080,
    3285030, -2765764, 2194716, -1639146, 1144799, -737578,
    426641, -208332, 70366, 4213, -33662, 34965,
    2003, 25210, -86993, 196714, -366078, 602255,
    -904583, 1261178, -1645894, 2016139, -2312086, 2457735,
    -2364239, 1935665, -1077183, -294609, 2239790, -4782445,
    7898246, -11503375, 15445914, -19500661, 23368059, -26677455,
    28994321, -29830228, 28653328, -24895516, 17950001, -7148452,
    -8302678, 29469367, -58022084, 97028817, -153104543, 243621713,
    -431835220, 1246643157, 1464652508, -419450254, 214500170, -121243834,
    66006724, -29345001, 3922521, 13699868, -25440906, 32556348,
    -35990683, 36530013, -34867147, 31625232, -27361663, 22563561,
    -17641089, 12922188, -8650621, 4988126, -2020652, -231882,
    1803259, -2767191, 3223263, -3283685, 3061728, -2662463,
    2176160, -1674398, 1208685, -811211, 497216, -268379,
    116689, -28279, -13162, 23676, 12616, 6582,
    -58858, 159034, -321227, 556019, -867078, 1247514,
    -1676392, 2115929, -2509897, 2783795, -2847222, 2598755,
    -1933420, 752576, 1024242, -3446239, 6518008, -10186982,
    14332878, -18760159, 23194345, -27282580, 30598257, -32648708,
    32883849, -30702057, 25446923, -16383722, 2634294, 16974626,
    -44256896, 82500596, -138752946, 231598039, -430021119, 1358456924,
    1358456924, -430021119, 231598039, -138752946, 82500596, -44256896,
    16974626, 2634294, -16383722, 25446923, -30702057, 32883849,
    -32648708, 30598257, -27282580, 23194345, -18760159, 14332878,
    -10186982, 6518008, -3446239, 1024242, 752576, -1933420,
    2598755, -2847222, 2783795, -2509897, 2115929, -1676392,
    1247514, -867078, 556019, -321227, 159034, -58858,
    6582, 12616, 23676, -13162, -28279, 116689,
    -268379, 497216, -811211, 1208685, -1674398, 2176160,
    -2662463, 3061728, -3283685, 3223263, -2767191, 1803259,
    -231882, -2020652, 4988126, -8650621, 12922188, -17641089,
    22563561, -27361663, 31625232, -34867147, 36530013, -35990683,
    32556348, -25440906, 13699868, 3922521, -29345001, 66006724,
    -121243834, 214500170, -419450254, 1464652508, 1246643157, -431835220,
    243621713, -153104543, 97028817, -58022084, 29469367, -8302678,
    -7148452, 17950001, -24895516, 28653328, -29830228, 28994321,
    -26677455, 23368059, -19500661, 15445914, -11503375, 7898246,
    -4782445, 2239790, -294609, -1077183, 1935665, -2364239,
    2457735, -2312086, 2016139, -1645894, 1261178, -904583,
    602255, -366078, 196714, -86993, 25210, 2003,
    34965, -33662, 4213, 70366, -208332, 426641,
    -737578, 1144799, -1639146, 2194716, -2765764, 3285030,
    -3664080, 3796130, -3561650, 2836808, -1504541, -532268,
    3336316, -6921112, 11237109, -16159902, 21481547, -26905737,
    32047045, -36433695, 39512185, -40650444, 39133444, -34140121,
    24679875, -9442044, -13554117, 47821674, -100823241, 192449463,
    -399721803, 1564039215, 1130452224, -425398828, 250543891, -164117799,
    109360162, -70399890, 41176791, -18902807, 2084332, 10215765,
    -18690427, 23928257, -26474434, 26852386, -25565303, 23087783,
    -19853703, 16244128, -12577642, 9104452, -6004839, 3391906,
    -1318082, -215463, 1247557, -1845003, 2090855, -2073843,
    1879632, -1584283, 1250064, -923507, 635400, -402317,
    229158, -112229, 42398, -7965, 46245, -54519,
    38030, 20863, -142059, 345350, -647148, 1056471,
    -1570515, 2170259, -2816670, 3448142, -3979777, 4305074,
    -4300422, 3832566, -2768969, 990659, 1593128, -5029480,
    9306644, -14340398, 19963083, -25916198, 31846959, -37308540,
    41762598, -44581091, 45041638, -42305686, 35358288, -22863692,
    2825612, 28258940, -77799634, 165662533, -370549136, 1655492889,
    1011158663, -411313524, 252428616, -171678627, 119310006, -81180700,
    51886004, -28967663, 11136845, 2396785, -12212156, 18806738,
    -22653562, 24221271, -23974675, 22365337, -19818020, 16716703,
    -13392647, 10115983, -7091586, 4459341, -2298436, 634955,
    548227, -1300286, 1691106, -1800666, 1709897, -1493513,
    1215032, -923999, 655204, -429521, 255919, -134185,
    57870, -17117, 57265, -75310, 72527, -30929,
    -70692, 254651, -541258, 944820, -1469050, 2102278,
    -2813026, 3546588, -4223259, 4738843, -4967935, 4770264,
    -4000144, 2518742, -208614, -3010409, 7165047, -12213362,
    18031718, -24404922, 31020188, -37464857, 43226850, -47695193,
    50155399, -49769609, 45521382, -36081332, 19486749, 7665968,
    -52539934, 134450889, -331767016, 1737971303, 890053399, -390264861,
    249427133, -175739990, 126742735, -90189329, 61408863, -38312268,
    19837454, -5354949, -5589565, 13393163, -18447835, 21158579,
    -21942979, 21220928, -19399886, 16859281, -13936531, 10916290,
    -8023831, 5422839, -3217436, 1457806, -148568, -741142,
    1266915, -1498610, 1510993, -1376061, 1157385, -906567,
    661686, -447457, 276683, -152562, 71398, -25312,
    67764, -95592, 107019, -84038, 4496, 156080,
    -421591, 811462, -1335964, 1991117, -2753712, 3577080,
    -4388290, 5087459, -5549743, 5630430, -5173283, 4022017,
    -2034420, -901614, 4851223, -9816064, 15719438, -22394185,
    29574157, -36889517, 43865153, -49920024, 54362851, -56374977,
    54961926, -48833101, 36110132, -13581656, -25464370, 99218982,
    -283337122, 1810528484, 768426526, -363010001, 241772420, -176320994,
    131573202, -97287671, 69583162, -46768417, 28023886, -12890945,
    1047516, 7796113, -13943807, 17729455, -19515631, 19682641,
    -18612889, 16673958, -14202865, 11493172, -8786012, 6265479,
    -4058347, 2237651, -829378, -178690, 827011, -1174164,
    1287450, -1234859, 1078837, -872055, 655125, -456085,
    291263, -167149, 82805, -32435, 77478, -114910,
    140793, -137429, 82112, 51379, -290156, 658490,
    -1173131, 1837988, -2638691, 3537609, -4470066, 5342443,
    -6032835, 6394779, -6264336, 5470524, -3848791, 1256854,
    2408038, -7191616, 13066158, -19916364, 27528528, -35583533,
    43653318, -51199201, 57568160, -61979181, 63483314, -60861425,
    52370769, -35086679, 2959779, 60460653, -225351771, 1872327768,
    647550271, -330364552, 229772504, -173504825, 133767224, -102376604,
    76275276, -54187629, 35546194, -20069013, 7570808, 2126203,
    -9232595, 14005229, -16745065, 17785782, -17477556, 16169147,
    -14190692, 11838943, -9366113, 6972964, -4806241, 2960162,
    -1481316, 376106, 380246, -834110, 1044179, -1073236,
    981466, -821617, 636051, -455548, 299604, -177817,
    91969, -38404, 86144, -132810, 173122, -190025,
    160666, -57533, -149254, 488446, -983063, 1644967,
    -2469030, 3427512, -4465335, 5497004, -6405911, 7046606,
    -7250467, 6834904, -5615898, 3423364, -118471, -4388213,
    10119048, -17013449, 24914986, -33562235, 42583451, -51494011,
    59693636, -66456917, 70903557, -71918069, 67943965, -56437212,
    32225459, 18754012, -158035772, 1922653383, 528662376, -293188812,
    213802714, -167435579, 133341118, -105397135, 81382222, -60443679,
    42269456, -26755911, 13856029, -3506079, -4408066, 10061948,
    -13689621, 15572098, -16020863, 15359321, -13904463, 11950516,
    -9755841, 7533854, -5448251, 3612383, -2092297, 912645,
    -64576, -485385, 786359, -894834, 867660, -756690,
    605220, -446169, 301778, -184522, 98817, -43166,
    93510, -148846, 203279, -240723, 238601, -168593,
    -1442, 304276, -768880, 1414970, -2246908, 3247515,
    -4372494, 5546214, -6659645, 7571132, -8110530, 8086980,
    -7300285, 5555493, -2679947, -1458260, 6931711, -13736354,
    21776785, -30855176, 40664329, -50784431, 60681523, -69702893,
    77059062, -81769112, 82511565, -77214189, 61794025, -25245209,
    -81746345, 1960920376, 412950151, -252373651, 194297009, -158314075,
    130360314, -106330755, 84833096, -65434663, 48076138, -32829776,
    19785236, -8992500, 435019, 5978842, -10412336, 13088873,
    -14275614, 14264645, -13353868, 11829390, -9950725, 7939743,
    -5973784, 4182955, -2651258, 1420891, -498869, -134945,
    519331, -703535, 740068, -678950, 563600, -428430,
    297978, -187305, 103332, -46700, 99337, -162589,
    230551, -288422, 314322, -279636, 150516, 109289,
    -534257, 1151718, -1975590, 2999742, -4191654, 5487130,
    -6786897, 7955839, -8825512, 9200335, -8867572, 7610857,
    -5226639, 1542601, 3563226, -10144043, 18168062, -27505749,
    37921472, -49069783, 60495419, -71634190, 81808113, -90199729,
    95768196, -96999140, 91104223, -70811749, 3028921, 1986682749,
    301535426, -208826248, 171738560, -146392741, 124937087, -105199040,
    86589884, -69084561, 52868091, -38182311, 25249007, -14229144,
    5202846, 1836750, -6979656, 10387938, -12279729, 12910502,
    -12553572, 11481545, -9950140, 8185369, -6374692, 4662306,
    -3148358, 1891557, -914434, 210374, 248496, -503375,
    601539, -590279, 512338, -402968, 288505, -186283,
    105542, -49012, 103406, -173642, 254258, -332042,
    386227, -388428, 303693, -92907, -283364, 859676,
    -1659390, 2687707, -3924671, 5318901, -6782899, 8190749,
    -9378942, 10150859, -10285150, 9547939, -7708351, 4556530,
    77060, -6302486, 14152927, -23570529, 34396879, -46369025,
    59121304, -72192230, 85033984, -97018691, 107427387, -115382123,
    119581826, -117160251, 95676054, 1999639672, 195460608, -163455919,
    146649758, -131969693, 117227465, -102062496, 86647632, -71344292,
    56568151, -42720670, 30148435, -19118353, 9804349, -2283466,
    -3460108, 7524601, -10075426, 11326924, -11522850, 10917264,
    -9757263, 8268666, -6645386, 5042812, -3575139, 2316267,
    -1303606, 543985, -20800, -298466, 455060, -492719,
    452739, -370546, 273767, -181643, 105527, -50136,
];

pub static SRC_INT32_40_21_3968_5000: StageDescriptor = StageDescriptor {
    name: "int32_40_21_3968_5000",
    input_stride: 11,
    output_stride: 21,
    subfilter_count: 40,
    subfilter_length: 52,
    block_in: 21,
    block_out: 40,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_40_21_3968_5000_FIR),
};

static SRC_INT32_40_21_3968_5000_FIR: [i32; 2080] = [
    -48704, 156750, -338114, 571566, -784641, 842493,
    -552783, -306571, 1934153, -4430219, 7711706, -11435192,
    14949708, -17300375, 17297375, -13653292, 5177047, 9002363,
    -29220970, 55118106, -85570092, 118753341, -152365019, 184061472,
    -212458064, 242107441, 1925486150, 191253069, -191060749, 173824151,
    -148276162, 118409495, -87454042, 58150467, -32618168, 12222387,
    2467145, -11610002, 15938850, -16548479, 14671658, -11480155,
    7938821, -4726311, 2221350, -541590, -384980, 737721,
    -728612, 547329, -330917, 156301, -47686, 156331,
    -343725, 593461, -837936, 945165, -721004, -65818,
    1632417, -4107158, 7442351, -11331909, 15155973, -17974356,
    18584821, -15651120, 7890920, 5701981, -25639955, 51775312,
    -83234840, 118506096, -155750082, 193563686, -233352669, 294395633,
    1922289783, 141947540, -169272581, 162914350, -143513777, 117483785,
    -88882667, 60860841, -35816705, 15346941, -225366, -9531921,
    14516833, -15723354, 14324114, -11467347, 8123152, -4994351,
    2492799, -769790, -218439, 631426, -670202, 520938,
    -322224, 155019, -46285, 155010, -347669, 612833,
    -888152, 1045157, -888784, 179533, 1317449, -3758361,
    7131521, -11170046, 15288495, -18566076, 19793872, -17592921,
    10595171, 2336926, -21891051, 48135318, -80454602, 117661341,
    -158404080, 202270534, -253632129, 347996419, 1915906653, 94299327,
    -147204409, 151396741, -138110938, 115988156, -89854227, 63239390,
    -38802880, 18361546, -2887293, -7429777, 13039138, -14829994,
    13909686, -11397600, 8264379, -5233417, 2747389, -990138,
    -53980, 524184, -609766, 492589, -312126, 152945,
    -44489, 152759, -349870, 629510, -934951, 1141894,
    -1055247, 428304, 990642, -3385215, 6780205, -10949636,
    15345667, -19071551, 20917526, -19468295, 13276110, -1076627,
    -17991200, 44212991, -77237982, 116215523, -160302912, 210124446,
    -273183871, 402782731, 1906355933, 48410039, -124965647, 139337710,
    -132103330, 113937188, -90369248, 65278025, -41564194, 21252426,
    -5505744, -5314297, 11513768, -13873675, 13431288, -11272021,
    8362405, -5442745, 2984111, -1201659, 107604, 416559,
    -547663, 462482, -300723, 150121, -42288, 149555,
    -350262, 643330, -978008, 1234802, -1219510, 679278,
    653473, -2989250, 6389610, -10671013, 15326241, -19487184,
    21949125, -21267059, 15920010, -4522079, -13958285, 40024772,
    -73595852, 114168012, -161425803, 217070850, -291895631, 458622056,
    1893666299, 4374137, -102663867, 126805028, -125529046, 111347988,
    -90430497, 66970423, -44089393, 24006569, -8068180, -3196156,
    9948873, -12859925, 12892117, -11091982, 8417347, -5621734,
    3202063, -1403440, 265548, 309110, -484252, 430821,
    -288118, 146595, -39675, 145378, -348784, 654142,
    -1017008, 1323318, -1380682, 931207, 307498, -2572138,
    5961163, -10334808, 15229346, -19809792, 22882404, -22979301,
    18513182, -7982494, -9811049, 35588613, -69541330, 111521145,
    -161755459, 223058478, -309655902, 515376846, 1877875821, -37721330,
    -80404401, 113867517, -118428368, 108240077, -90042940, 68312043,
    -46368519, 26611779, -10562480, -1085921, 8352704, -11794489,
    12295633, -10859108, 8429542, -5769943, 3400453, -1594632,
    419121, 202380, -419890, 397814, -274417, 142413,
    -36647, 140215, -345386, 661809, -1051649, 1406890,
    -1537873, 1182813, -45660, -2135682, 5496503, -9941955,
    15054488, -20036620, 23711517, -24595434, 21042041, -11440675,
    -5569015, 30923907, -65089737, 108280244, -161278195, 228039658,
    -326354394, 572904960, 1859031833, -77796948, -58289955, 100594717,
    -110843548, 104635267, -89213691, 69300124, -48392936, 29056735,
    -12976993, 1005998, 6733573, -10683307, 11645540, -10575272,
    8399535, -5887094, 3578601, -1774457, 567628, 96900,
    -354931, 363671, -259728, 137628, -33201, 134057,
    -340026, 666205, -1081649, 1484979, -1690196, 1432801,
    -404312, -1681814, 4997476, -9493688, 14801565, -20165369,
    24431079, -26106247, 23493175, -14879249, -1252393, 26051403,
    -60258552, 104453635, -159984057, 231970594, -341882480, 631060113,
    1837190756, -115781143, -36420239, 87056554, -102818579, 100557524,
    -87951956, 69933684, -50155367, 31331031, -15300592, 3069397,
    5099812, -9532471, 10945763, -10242573, 8328074, -5973070,
    3735939, -1942207, 710412, -6820, -289724, 328600,
    -244163, 132290, -29339, 126902, -332672, 667220,
    -1106741, 1557065, -1836772, 1679859, -766716, -1212579,
    4466130, -8991538, 14470867, -20194203, 25036194, -27502958,
    25853416, -18280751, 3118012, 20993123, -55067344, 100052644,
    -157866919, 234811637, -356133657, 689692358, 1812417904, -151610343,
    -14891622, 73323015, -94398959, 96032829, -86268964, 70213501,
    -51649908, 33425221, -17522724, 5094331, 3459728, -8348200,
    10200428, -9863330, 8216107, -6027912, 3872016, -2097248,
    846861, -108286, -224611, 292810, -227833, 126454,
    -25064, 118753, -323304, 664758, -1126680, 1622648,
    -1976737, 1922670, -1131080, -730138, 3904706, -8437331,
    14063085, -20121774, 25522488, -28777258, 28109909, -21627716,
    7520899, 15772262, -49537706, 95091578, -154924575, 236527538,
    -369003989, 748648568, 1784787240, -185229117, 6203206, 59463825,
    -85631456, 91089024, -84177883, 70142095, -52872049, 35330855,
    -19633458, 7071156, 1821563, -7136806, 9413835, -9440064,
    8064772, -6051820, 3986493, -2239021, 976403, -207028,
    -159926, 256510, -210853, 120173, -20383, 109619,
    -311909, 658743, -1141242, 1681252, -2109244, 2159915,
    -1495575, -236745, 3315631, -7833183, 13579306, -19947227,
    25886134, -29921364, 30250179, -24902758, 11934571, 10413089,
    -43693170, 89587693, -151158802, 237087687, -380392560, 807772949,
    1754381120, -216590282, 26775544, 45548128, -76563867, 85755657,
    -81693743, 69723691, -53818677, 37040512, -21623523, 8990578,
    193456, -5904657, 8590438, -8975484, 7875388, -6045142,
    4079148, -2367045, 1098516, -302601, -95991, 219902,
    -193335, 113504, -15308, 99515, -298489, 649112,
    -1150225, 1732428, -2233469, 2390280, -1858343, 265251,
    2701504, -7181488, 13021018, -19670213, 26123883, -30928060,
    32262197, -28088666, 16337037, 4940836, -37559112, 83561153,
    -146575409, 236466333, -390201909, 866907553, 1721289991, -245654973,
    46740973, 31644176, -67244773, 80063813, -78833334, 68964184,
    -54488078, 38547824, -23484353, 10843691, -1416600, -4658152,
    7734816, -8472467, 7649449, -6008381, 4149872, -2480918,
    1212722, -394584, -33120, 183188, -175391, 106501,
    -9851, 88462, -283054, 635822, -1153454, 1775758,
    -2348616, 2612466, -2217504, 773425, 2065090, -6484916,
    12390104, -19290899, 26233081, -31790743, 34134450, -31168486,
    20706122, -618416, -31162650, 77034961, -141184277, 234642792,
    -398338461, 925892811, 1685612071, -272392685, 66019630, 17819031,
    -57723300, 74045952, -75615106, 67871089, -54879932, 39847496,
    -25208115, 12622021, -3000797, -3403680, 6851653, -7934048,
    7388607, -5942179, 4198669, -2580316, 1318597, -482584,
    28390, 146564, -157133, 99219, -4029, 76490,
    -265627, 618848, -1150780, 1810853, -2453921, 2825192,
    -2571166, 1285284, 1409307, -5746400, 11688840, -18809969,
    26211692, -32503459, 35855997, -34125615, 25019575, -6237857,
    -24532530, 70034889, -134999361, 231601629, -404712949, 984568068,
    1647453001, -296781284, 84536450, 4138274, -48048874, 67735726,
    -72059059, 66453487, -54995295, 40935321, -26787747, 14317563,
    -4551544, -2147595, 5945712, -7363397, 7094672, -5847321,
    4225654, -2664994, 1415764, -566237, 88253, 110218,
    -138671, 91712, 2139, 63633, -246243, 598185,
    -1142082, 1837363, -2548656, 3027205, -2917436, 1798278,
    737211, -4969124, 10919885, -18228631, 26058318, -33060944,
    37416538, -36943880, 29255180, -11890071, -17699005, 62589389,
    -128038693, 227332821, -409240821, 1042772129, 1606925460, -318806982,
    102221398, -9334279, -38270980, 61167807, -68186628, 64721965,
    -54836585, 41808191, -28216980, 15922812, -6061506, -896182,
    5021807, -6763803, 6769589, -5724721, 4231051, -2734787,
    1503901, -645209, 146200, 74336, -120111, 84036,
    8629, 49931, -224948, 573848, -1127267, 1854973,
    -2632137, 3217285, -3254428, 2309814, 51983, -4156511,
    10086276, -17548612, 25772207, -33458658, 38806468, -39607633,
    33390864, -17547172, -10693700, 54729482, -120324353, 221831907,
    -411842636, 1100343807, 1564148773, -338464286, 119009665, -22536845,
    -28438929, 54377704, -64020563, 62688543, -54407550, 42464100,
    -29490365, 17430799, -7523639, 344376, 4084784, -6138657,
    6415436, -5575421, 4215189, -2789610, 1582735, -719198,
    201978, 39091, -101558, 76242, 15415, 35431,
    -201802, 545870, -1106275, 1863411, -2703724, 3394253,
    -3580277, 2817269, -643083, -3312209, 9191414, -16772161,
    25353272, -33692811, 40016933, -42101827, 37404813, -23180929,
    -3549475, 46488648, -111882425, 215100101, -412444444, 1157122478,
    1519248480, -355755914, 134841847, -35409925, -18601615, 47401581,
    -59584801, 60366606, -53713241, 42902139, -30603284, 18835120,
    -8931219, 1568023, 3139489, -5491432, 6034405, -5400581,
    4178500, -2829453, 1652050, -787933, 255353, 4652,
    -83113, 68382, 22468, 20189, -176875, 514308,
    -1079074, 1862444, -2762825, 3556978, -3893140, 3318001,
    -1344598, -2440074, 8239054, -15902041, 24802091, -33760398,
    41039886, -44412105, 41275580, -28762910, 3699722, 37902689,
    -102742932, 207144397, -410978145, 1212948633, 1472355896, -370692679,
    149664096, -47896548, -8807296, 40276069, -54904333, 57770814,
    -52759966, 43122493, -31551972, 20129957, -10277871, 2768864,
    2190750, -4825664, 5628793, -5201474, 4121514, -2854383,
    1711680, -851176, 306106, -28822, -64873, 60505,
    29756, 4262, -150250, 479237, -1045667, 1851887,
    -2808905, 3704383, -4191217, 3809364, -2049094, -1544153,
    7233288, -14941521, 24119920, -33659217, 41868132, -46524872,
    44982201, -34264615, 11019012, 29009591, -92939755, 197977643,
    -407381835, 1267664426, 1423607641, -383293344, 163428248, -59942498,
    896634, 33038091, -50005074, 54917026, -51555252, 43126427,
    -32333520, 21310106, -11557601, 3941188, 1243350, -4144935,
    5200988, -4979473, 4044854, -2864544, 1761513, -908724,
    354039, -61183, -46929, 52659, 37243, -12282,
    -122020, 440753, -1006089, 1831600, -2841486, 3835451,
    -4472752, 4288720, -2753039, -628669, 6178530, -13894365,
    23308686, -33387891, 42495376, -48427379, 48504300, -39657621,
    18372746, 19849361, -82510530, 187618590, -401600127, 1321114227,
    1373145160, -393584454, 176091920, -71496524, 10463862, 25724668,
    -44913722, 51822199, -50107789, 42916267, -32945887, 22370991,
    -12764820, 5079497, 302002, -3452855, 4753454, -4736047,
    3949234, -2860150, 1801489, -960407, 398975, -92292,
    -29371, 44891, 44891, -29371, -92292, 398975,
    -960407, 1801489, -2860150, 3949234, -4736047, 4753454,
    -3452855, 302002, 5079497, -12764820, 22370991, -32945887,
    42916267, -50107789, 51822199, -44913722, 25724668, 10463862,
    -71496524, 176091920, -393584454, 1373145160, 1321114227, -401600127,
    187618590, -82510530, 19849361, 18372746, -39657621, 48504300,
    -48427379, 42495376, -33387891, 23308686, -13894365, 6178530,
    -628669, -2753039, 4288720, -4472752, 3835451, -2841486,
    1831600, -1006089, 440753, -122020, -12282, 37243,
    52659, -46929, -61183, 354039, -908724, 1761513,
    -2864544, 4044854, -4979473, 5200988, -4144935, 1243350,
    3941188, -11557601, 21310106, -32333520, 43126427, -51555252,
    54917026, -50005074, 33038091, 896634, -59942498, 163428248,
    -383293344, 1423607641, 1267664426, -407381835, 197977643, -92939755,
    29009591, 11019012, -34264615, 44982201, -46524872, 41868132,
    -33659217, 24119920, -14941521, 7233288, -1544153, -2049094,
    3809364, -4191217, 3704383, -2808905, 1851887, -1045667,
    479237, -150250, 4262, 29756, 60505, -64873,
    -28822, 306106, -851176, 1711680, -2854383, 4121514,
    -5201474, 5628793, -4825664, 2190750, 2768864, -10277871,
    20129957, -31551972, 43122493, -52759966, 57770814, -54904333,
    40276069, -8807296, -47896548, 149664096, -370692679, 1472355896,
    1212948633, -410978145, 207144397, -102742932, 37902689, 3699722,
    -28762910, 41275580, -44412105, 41039886, -33760398, 24802091,
    -15902041, 8239054, -2440074, -1344598, 3318001, -3893140,
    3556978, -2762825, 1862444, -1079074, 514308, -176875,
    20189, 22468, 68382, -83113, 4652, 255353,
    -787933, 1652050, -2829453, 4178500, -5400581, 6034405,
    -5491432, 3139489, 1568023, -8931219, 18835120, -30603284,
    42902139, -53713241, 60366606, -59584801, 47401581, -18601615,
    -35409925, 134841847, -355755914, 1519248480, 1157122478, -412444444,
    215100101, -111882425, 46488648, -3549475, -23180929, 37404813,
    -42101827, 40016933, -33692811, 25353272, -16772161, 9191414,
    -3312209, -643083, 2817269, -3580277, 3394253, -2703724,
    1863411, -1106275, 545870, -201802, 35431, 15415,
    76242, -101558, 39091, 201978, -719198, 1582735,
    -2789610, 4215189, -5575421, 6415436, -6138657, 4084784,
    344376, -7523639, 17430799, -29490365, 42464100, -54407550,
    62688543, -64020563, 54377704, -28438929, -22536845, 119009665,
    -338464286, 1564148773, 1100343807, -411842636, 221831907, -120324353,
    54729482, -10693700, -17547172, 33390864, -39607633, 38806468,
    -33458658, 25772207, -17548612, 10086276, -4156511, 51983,
    2309814, -3254428, 3217285, -2632137, 1854973, -1127267,
    573848, -224948, 49931, 8629, 84036, -120111,
    74336, 146200, -645209, 1503901, -2734787, 4231051,
    -5724721, 6769589, -6763803, 5021807, -896182, -6061506,
    15922812, -28216980, 41808191, -54836585, 64721965, -68186628,
    61167807, -38270980, -9334279, 102221398, -318806982, 1606925460,
    1042772129, -409240821, 227332821, -128038693, 62589389, -17699005,
    -11890071, 29255180, -36943880, 37416538, -33060944, 26058318,
    -18228631, 10919885, -4969124, 737211, 1798278, -2917436,
    3027205, -2548656, 1837363, -1142082, 598185, -246243,
    63633, 2139, 91712, -138671, 110218, 88253,
    -566237, 1415764, -2664994, 4225654, -5847321, 7094672,
    -7363397, 5945712, -2147595, -4551544, 14317563, -26787747,
    40935321, -54995295, 66453487, -72059059, 67735726, -48048874,
    4138274, 84536450, -296781284, 1647453001, 984568068, -404712949,
    231601629, -134999361, 70034889, -24532530, -6237857, 25019575,
    -34125615, 35855997, -32503459, 26211692, -18809969, 11688840,
    -5746400, 1409307, 1285284, -2571166, 2825192, -2453921,
    1810853, -1150780, 618848, -265627, 76490, -4029,
    99219, -157133, 146564, 28390, -482584, 1318597,
    -2580316, 4198669, -5942179, 7388607, -7934048, 6851653,
    -3403680, -3000797, 12622021, -25208115, 39847496, -54879932,
    67871089, -75615106, 74045952, -57723300, 17819031, 66019630,
    -272392685, 1685612071, 925892811, -398338461, 234642792, -141184277,
    77034961, -31162650, -618416, 20706122, -31168486, 34134450,
    -31790743, 26233081, -19290899, 12390104, -6484916, 2065090,
    773425, -2217504, 2612466, -2348616, 1775758, -1153454,
    635822, -283054, 88462, -9851, 106501, -175391,
    183188, -33120, -394584, 1212722, -2480918, 4149872,
    -6008381, 7649449, -8472467, 7734816, -4658152, -1416600,
    10843691, -23484353, 38547824, -54488078, 68964184, -78833334,
    80063813, -67244773, 31644176, 46740973, -245654973, 1721289991,
    866907553, -390201909, 236466333, -146575409, 83561153, -37559112,
    4940836, 16337037, -28088666, 32262197, -30928060, 26123883,
    -19670213, 13021018, -7181488, 2701504, 265251, -1858343,
    2390280, -2233469, 1732428, -1150225, 649112, -298489,
    99515, -15308, 113504, -193335, 219902, -95991,
    -302601, 1098516, -2367045, 4079148, -6045142, 7875388,
    -8975484, 8590438, -5904657, 193456, 8990578, -21623523,
    37040512, -53818677, 69723691, -81693743, 85755657, -76563867,
    45548128, 26775544, -216590282, 1754381120, 807772949, -380392560,
    237087687, -151158802, 89587693, -43693170, 10413089, 11934571,
    -24902758, 30250179, -29921364, 25886134, -19947227, 13579306,
    -7833183, 3315631, -236745, -1495575, 2159915, -2109244,
    1681252, -1141242, 658743, -311909, 109619, -20383,
    120173, -210853, 256510, -159926, -207028, 976403,
    -2239021, 3986493, -6051820, 8064772, -9440064, 9413835,
    -7136806, 1821563, 7071156, -19633458, 35330855, -52872049,
    70142095, -84177883, 91089024, -85631456, 59463825, 6203206,
    -185229117, 1784787240, 748648568, -369003989, 236527538, -154924575,
    95091578, -49537706, 15772262, 7520899, -21627716, 28109909,
    -28777258, 25522488, -20121774, 14063085, -8437331, 3904706,
    -730138, -1131080, 1922670, -1976737, 1622648, -1126680,
    664758, -323304, 118753, -25064, 126454, -227833,
    292810, -224611, -108286, 846861, -2097248, 3872016,
    -6027912, 8216107, -9863330, 10200428, -8348200, 3459728,
    5094331, -17522724, 33425221, -51649908, 70213501, -86268964,
    96032829, -94398959, 73323015, -14891622, -151610343, 1812417904,
    689692358, -356133657, 234811637, -157866919, 100052644, -55067344,
    20993123, 3118012, -18280751, 25853416, -27502958, 25036194,
    -20194203, 14470867, -8991538, 4466130, -1212579, -766716,
    1679859, -1836772, 1557065, -1106741, 667220, -332672,
    126902, -29339, 132290, -244163, 328600, -289724,
    -6820, 710412, -1942207, 3735939, -5973070, 8328074,
    -10242573, 10945763, -9532471, 5099812, 3069397, -15300592,
    31331031, -50155367, 69933684, -87951956, 100557524, -102818579,
    87056554, -36420239, -115781143, 1837190756, 631060113, -341882480,
    231970594, -159984057, 104453635, -60258552, 26051403, -1252393,
    -14879249, 23493175, -26106247, 24431079, -20165369, 14801565,
    -9493688, 4997476, -1681814, -404312, 1432801, -1690196,
    1484979, -1081649, 666205, -340026, 134057, -33201,
    137628, -259728, 363671, -354931, 96900, 567628,
    -1774457, 3578601, -5887094, 8399535, -10575272, 11645540,
    -10683307, 6733573, 1005998, -12976993, 29056735, -48392936,
    69300124, -89213691, 104635267, -110843548, 100594717, -58289955,
    -77796948, 1859031833, 572904960, -326354394, 228039658, -161278195,
    108280244, -65089737, 30923907, -5569015, -11440675, 21042041,
    -24595434, 23711517, -20036620, 15054488, -9941955, 5496503,
    -2135682, -45660, 1182813, -1537873, 1406890, -1051649,
    661809, -345386, 140215, -36647, 142413, -274417,
    397814, -419890, 202380, 419121, -1594632, 3400453,
    -5769943, 8429542, -10859108, 12295633, -11794489, 8352704,
    -1085921, -10562480, 26611779, -46368519, 68312043, -90042940,
    108240077, -118428368, 113867517, -80404401, -37721330, 1877875821,
    515376846, -309655902, 223058478, -161755459, 111521145, -69541330,
    35588613, -9811049, -7982494, 18513182, -22979301, 22882404,
    -19809792, 15229346, -10334808, 5961163, -2572138, 307498,
    931207, -1380682, 1323318, -1017008, 654142, -348784,
    145378, -39675, 146595, -288118, 430821, -484252,
    309110, 265548, -1403440, 3202063, -5621734, 8417347,
    -11091982, 12892117, -12859925, 9948873, -3196156, -8068180,
    24006569, -44089393, 66970423, -90430497, 111347988, -125529046,
    126805028, -102663867, 4374137, 1893666299, 458622056, -291895631,
    217070850, -161425803, 114168012, -73595852, 40024772, -13958285,
    -4522079, 15920010, -21267059, 21949125, -19487184, 15326241,
    -10671013, 6389610, -2989250, 653473, 679278, -1219510,
    1234802, -978008, 643330, -350262, 149555, -42288,
    150121, -300723, 462482, -547663, 416559, 107604,
    -1201659, 2984111, -5442745, 8362405, -11272021, 13431288,
    -13873675, 11513768, -5314297, -5505744, 21252426, -41564194,
    65278025, -90369248, 113937188, -132103330, 139337710, -124965647,
    48410039, 1906355933, 402782731, -273183871, 210124446, -160302912,
    116215523, -77237982, 44212991, -17991200, -1076627, 13276110,
    -19468295, 20917526, -19071551, 15345667, -10949636, 6780205,
    -3385215, 990642, 428304, -1055247, 1141894, -934951,
    629510, -349870, 152759, -44489, 152945, -312126,
    492589, -609766, 524184, -53980, -990138, 2747389,
    -5233417, 8264379, -11397600, 13909686, -14829994, 13039138,
    -7429777, -2887293, 18361546, -38802880, 63239390, -89854227,
    115988156, -138110938, 151396741, -147204409, 94299327, 1915906653,
    347996419, -253632129, 202270534, -158404080, 117661341, -80454602,
    48135318, -21891051, 2336926, 10595171, -17592921, 19793872,
    -18566076, 15288495, -11170046, 7131521, -3758361, 1317449,
    179533, -888784, 1045157, -888152, 612833, -347669,
    155010, -46285, 155019, -322224, 520938, -670202,
    631426, -218439, -769790, 2492799, -4994351, 8123152,
    -11467347, 14324114, -15723354, 14516833, -9531921, -225366,
    15346941, -35816705, 60860841, -88882667, 117483785, -143513777,
    162914350, -169272581, 141947540, 1922289783, 294395633, -233352669,
    193563686, -155750082, 118506096, -83234840, 51775312, -25639955,
    5701981, 7890920, -15651120, 18584821, -17974356, 15155973,
    -11331909, 7442351, -4107158, 1632417, -65818, -721004,
    945165, -837936, 593461, -343725, 156331, -47686,
    156301, -330917, 547329, -728612, 737721, -384980,
    -541590, 2221350, -4726311, 7938821, -11480155, 14671658,
    -16548479, 15938850, -11610002, 2467145, 12222387, -32618168,
    58150467, -87454042, 118409495, -148276162, 173824151, -191060749,
    191253069, 1925486150, 242107441, -212458064, 184061472, -152365019,
    118753341, -85570092, 55118106, -29220970, 9002363, 5177047,
    -13653292, 17297375, -17300375, 14949708, -11435192, 7711706,
    -4430219, 1934153, -306571, -552783, 842493, -784641,
    571566, -338114, 156750, -48704,
];

pub static SRC_INT32_21_20_4167_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_20_4167_5000",
    input_stride: 19,
    output_stride: 20,
    subfilter_count: 21,
    subfilter_length: 52,
    block_in: 20,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_20_4167_5000_FIR),
};

static SRC_INT32_21_20_4167_5000_FIR: [i32; 1092] = [
    -148365, 253251, -300044, 198018, 165016, -904116,
    2109032, -3809131, 5936407, -8293365, 10533360, -12160474,
    12553979, -11019062, 6861167, 523301, -11551306, 26366797,
    -44779009, 66240300, -89877091, 114589459, -139253201, 163152569,
    -187327445, 223249753, 1846610288, 130583077, -146550977, 141645404,
    -128384601, 110446135, -90107433, 69197295, -49230987, 31387478,
    -16470657, 4896061, 3285785, -8331721, 10723485, -11073331,
    10031194, -8205040, 6102582, -4098230, 2424839, -1186255,
    384239, 47534, -209322, 206397, -166569, 297924,
    -389487, 351244, -65886, -594767, 1742814, -3438876,
    5652714, -8226411, 10847843, -13042081, 14186734, -13554119,
    10378908, -3945006, -6319272, 20752631, -39396566, 61975727,
    -87948323, 116670859, -147794258, 182325160, -226613958, 321135533,
    1835142568, 43907150, -105054593, 118266980, -115448664, 104364730,
    -88671030, 70818254, -52688233, 35733161, -20992285, 9094186,
    -279892, -5544994, 8733380, -9805380, 9355049, -7966914,
    6151241, -4303075, 2685872, -1436800, 588081, -97459,
    -119135, 158426, -182704, 339334, -475770, 504292,
    -304392, -263274, 1331662, -2992218, 5253760, -8001533,
    10964194, -13696782, 15586558, -15885789, 13771400, -8426423,
    -867126, 14639231, -33166657, 56457111, -84320484, 116601851,
    -153783204, 198725893, -263628339, 423384751, 1812335900, -36098867,
    -63585259, 93497987, -100735707, 96501411, -85629375, 71099825,
    -55106036, 39336334, -25040115, 13043342, -3770016, -2712550,
    6623954, -8384165, 8521553, -7587128, 6084582, -4422234,
    2888933, -1652111, 773268, -234431, -31202, 110367,
    -196221, 376406, -556988, 654120, -546125, 84690,
    882096, -2475521, 4744073, -7619042, 10875497, -14107040,
    16721924, -17965764, 16972057, -12836658, 4706629, 8132057,
    -26189820, 49762567, -79024638, 114331768, -157036133, 211951991,
    -297587677, 529067481, 1778446098, -108855370, -22856546, 67827790,
    -84560253, 87041119, -81072038, 70063328, -56459696, 42144471,
    -28548276, 16675229, -7121438, 112182, 4436862, -6839472,
    7549877, -7076264, 5906903, -4455925, 3032010, -1829335,
    937004, -361114, 52885, 63190, -206594, 408096,
    -631244, 797620, -786478, 442941, 401584, -1896682,
    4130433, -7082270, 10578583, -14259577, 17565651, -19749515,
    19916591, -17091120, 10299303, 1346008, -18582587, 41993823,
    -72123658, 109849580, -157414230, 221643306, -327720020, 637190454,
    1733852586, -173887893, 16460928, 41745825, -67254839, 76193594,
    -75114450, 67753885, -56744596, 44120724, -31462127, 19928738,
    -10274824, 2877007, 2214320, -5202728, 6461321, -6447091,
    5624466, -4405963, 3114286, -1966436, 1077005, -475532,
    131688, 17791, -213333, 433415, -696695, 931684,
    -1020701, 804881, -101577, -1265023, 3421790, -6397585,
    10074178, -14145721, 18095511, -21197204, 22544278, -21106513,
    15805872, -5596560, -10475609, 33274801, -63711743, 103185037,
    -154827509, 227489980, -353276190, 746709000, 1679053311, -230831156,
    53748160, 15733235, -49163659, 64189024, -67895272, 64239127,
    -55975907, 45244301, -33739058, 22750948, -13175685, 5531904,
    -1690, -3506371, 5278863, -5714267, 5245328, -4275678,
    3136112, -2062208, 1191526, -576030, 203942, -25024,
    -215999, 451454, -751588, 1053259, -1243986, 1163621,
    -618392, -591147, 2629159, -5574342, 9366983, -13761673,
    18294762, -22274546, 24799176, -24802430, 21120916, -12567987,
    -2011483, 23749746, -53913345, 94409091, -149237778, 229239476,
    -373541538, 856539835, 1614658080, -279431514, 88445423, -9745121,
    -30636165, 51273443, -59573385, 59607514, -54187936, 45510558,
    -35349048, 25097943, -15775292, 8029917, -2170207, -1783226,
    4026693, -4894023, 4779139, -4069814, 3098967, -2116265,
    1279372, -661292, 268575, -64550, -214216, 461406,
    -794303, 1159418, -1451564, 1512104, -1139329, 113226,
    1765456, -4624776, 8465674, -13108687, 18152577, -22953565,
    26631281, -28102936, 26140600, -19437611, 6657687, 13580950,
    -42881510, 83633578, -140660768, 226702870, -387847468, 965574536,
    1541380411, -319547822, 120058811, -34248170, -12020719, 37703923,
    -50324581, 53966307, -51433125, 44930776, -36274990, 26935463,
    -18031467, 10327964, -4252020, -65882, 2729728, -4003815,
    4236922, -3794399, 3005395, -2129028, 1339905, -730354,
    324719, -100192, -207687, 462594, -823393, 1247420,
    -1638800, 1843234, -1654484, 835459, 845301, -3563842,
    7382834, -12193161, 17664378, -23213259, 27997590, -30938080,
    30764655, -26074168, 15372957, 2946086, -30795665, 71010149,
    -129167353, 219760264, -395582527, 1072693503, 1460028025, -351150697,
    148165618, -57365516, 6341573, 23743694, -40338013, 47439236,
    -47780750, 43531654, -36512758, 28239346, -19909241, 12387561,
    -6210372, 1613909, 1413132, -3061969, 3630827, -3456591,
    2858925, -2101682, 1373031, -782605, 371717, -131473,
    -196202, 454488, -837618, 1314775, -1801289, 2150023,
    -2153762, 1562212, -115216, -2408993, 6134795, -11026626,
    16832058, -23040137, 28863054, -33245339, 34898342, -32348243,
    23971387, -7964791, -17858858, 56728449, -114883829, 208365225,
    -396202914, 1176780210, 1371492118, -374320235, 172418462, -78723625,
    24122758, 9657239, -29812468, 40163908, -43315322, 41354530,
    -36071041, 28995789, -21381358, 14175443, -8011590, 3225807,
    101840, -2087313, 2973875, -3064512, 2663971, -2036136,
    1379185, -817788, 409128, -158038, -179653, 436725,
    -835989, 1359301, -1934954, 2425723, -2627070, 2279687,
    -1098814, -1179906, 4741422, -9625642, 15664078, -22428631,
    29201397, -34970939, 38454339, -38134741, 32289015, -18952542,
    -4294518, 41013562, -97991225, 192548148, -389242219, 1276735561,
    1276735561, -389242219, 192548148, -97991225, 41013562, -4294518,
    -18952542, 32289015, -38134741, 38454339, -34970939, 29201397,
    -22428631, 15664078, -9625642, 4741422, -1179906, -1098814,
    2279687, -2627070, 2425723, -1934954, 1359301, -835989,
    436725, -179653, -158038, 409128, -817788, 1379185,
    -2036136, 2663971, -3064512, 2973875, -2087313, 101840,
    3225807, -8011590, 14175443, -21381358, 28995789, -36071041,
    41354530, -43315322, 40163908, -29812468, 9657239, 24122758,
    -78723625, 172418462, -374320235, 1371492118, 1176780210, -396202914,
    208365225, -114883829, 56728449, -17858858, -7964791, 23971387,
    -32348243, 34898342, -33245339, 28863054, -23040137, 16832058,
    -11026626, 6134795, -2408993, -115216, 1562212, -2153762,
    2150023, -1801289, 1314775, -837618, 454488, -196202,
    -131473, 371717, -782605, 1373031, -2101682, 2858925,
    -3456591, 3630827, -3061969, 1413132, 1613909, -6210372,
    12387561, -19909241, 28239346, -36512758, 43531654, -47780750,
    47439236, -40338013, 23743694, 6341573, -57365516, 148165618,
    -351150697, 1460028025, 1072693503, -395582527, 219760264, -129167353,
    71010149, -30795665, 2946086, 15372957, -26074168, 30764655,
    -30938080, 27997590, -23213259, 17664378, -12193161, 7382834,
    -3563842, 845301, 835459, -1654484, 1843234, -1638800,
    1247420, -823393, 462594, -207687, -100192, 324719,
    -730354, 1339905, -2129028, 3005395, -3794399, 4236922,
    -4003815, 2729728, -65882, -4252020, 10327964, -18031467,
    26935463, -36274990, 44930776, -51433125, 53966307, -50324581,
    37703923, -12020719, -34248170, 120058811, -319547822, 1541380411,
    965574536, -387847468, 226702870, -140660768, 83633578, -42881510,
    13580950, 6657687, -19437611, 26140600, -28102936, 26631281,
    -22953565, 18152577, -13108687, 8465674, -4624776, 1765456,
    113226, -1139329, 1512104, -1451564, 1159418, -794303,
    461406, -214216, -64550, 268575, -661292, 1279372,
    -2116265, 3098967, -4069814, 4779139, -4894023, 4026693,
    -1783226, -2170207, 8029917, -15775292, 25097943, -35349048,
    45510558, -54187936, 59607514, -59573385, 51273443, -30636165,
    -9745121, 88445423, -279431514, 1614658080, 856539835, -373541538,
    229239476, -149237778, 94409091, -53913345, 23749746, -2011483,
    -12567987, 21120916, -24802430, 24799176, -22274546, 18294762,
    -13761673, 9366983, -5574342, 2629159, -591147, -618392,
    1163621, -1243986, 1053259, -751588, 451454, -215999,
    -25024, 203942, -576030, 1191526, -2062208, 3136112,
    -4275678, 5245328, -5714267, 5278863, -3506371, -1690,
    5531904, -13175685, 22750948, -33739058, 45244301, -55975907,
    64239127, -67895272, 64189024, -49163659, 15733235, 53748160,
    -230831156, 1679053311, 746709000, -353276190, 227489980, -154827509,
    103185037, -63711743, 33274801, -10475609, -5596560, 15805872,
    -21106513, 22544278, -21197204, 18095511, -14145721, 10074178,
    -6397585, 3421790, -1265023, -101577, 804881, -1020701,
    931684, -696695, 433415, -213333, 17791, 131688,
    -475532, 1077005, -1966436, 3114286, -4405963, 5624466,
    -6447091, 6461321, -5202728, 2214320, 2877007, -10274824,
    19928738, -31462127, 44120724, -56744596, 67753885, -75114450,
    76193594, -67254839, 41745825, 16460928, -173887893, 1733852586,
    637190454, -327720020, 221643306, -157414230, 109849580, -72123658,
    41993823, -18582587, 1346008, 10299303, -17091120, 19916591,
    -19749515, 17565651, -14259577, 10578583, -7082270, 4130433,
    -1896682, 401584, 442941, -786478, 797620, -631244,
    408096, -206594, 63190, 52885, -361114, 937004,
    -1829335, 3032010, -4455925, 5906903, -7076264, 7549877,
    -6839472, 4436862, 112182, -7121438, 16675229, -28548276,
    42144471, -56459696, 70063328, -81072038, 87041119, -84560253,
    67827790, -22856546, -108855370, 1778446098, 529067481, -297587677,
    211951991, -157036133, 114331768, -79024638, 49762567, -26189820,
    8132057, 4706629, -12836658, 16972057, -17965764, 16721924,
    -14107040, 10875497, -7619042, 4744073, -2475521, 882096,
    84690, -546125, 654120, -556988, 376406, -196221,
    110367, -31202, -234431, 773268, -1652111, 2888933,
    -4422234, 6084582, -7587128, 8521553, -8384165, 6623954,
    -2712550, -3770016, 13043342, -25040115, 39336334, -55106036,
    71099825, -85629375, 96501411, -100735707, 93497987, -63585259,
    -36098867, 1812335900, 423384751, -263628339, 198725893, -153783204,
    116601851, -84320484, 56457111, -33166657, 14639231, -867126,
    -8426423, 13771400, -15885789, 15586558, -13696782, 10964194,
    -8001533, 5253760, -2992218, 1331662, -263274, -304392,
    504292, -475770, 339334, -182704, 158426, -119135,
    -97459, 588081, -1436800, 2685872, -4303075, 6151241,
    -7966914, 9355049, -9805380, 8733380, -5544994, -279892,
    9094186, -20992285, 35733161, -52688233, 70818254, -88671030,
    104364730, -115448664, 118266980, -105054593, 43907150, 1835142568,
    321135533, -226613958, 182325160, -147794258, 116670859, -87948323,
    61975727, -39396566, 20752631, -6319272, -3945006, 10378908,
    -13554119, 14186734, -13042081, 10847843, -8226411, 5652714,
    -3438876, 1742814, -594767, -65886, 351244, -389487,
    297924, -166569, 206397, -209322, 47534, 384239,
    -1186255, 2424839, -4098230, 6102582, -8205040, 10031194,
    -11073331, 10723485, -8331721, 3285785, 4896061, -16470657,
    31387478, -49230987, 69197295, -90107433, 110446135, -128384601,
    141645404, -146550977, 130583077, 1846610288, 223249753, -187327445,
    163152569, -139253201, 114589459, -89877091, 66240300, -44779009,
    26366797, -11551306, 523301, 6861167, -11019062, 12553979,
    -12160474, 10533360, -8293365, 5936407, -3809131, 2109032,
    -904116, 165016, 198018, -300044, 253251, -148365,
];

pub static SRC_INT32_21_5_4535_5000: StageDescriptor = StageDescriptor {
    name: "int32_21_5_4535_5000",
    input_stride: 4,
    output_stride: 17,
    subfilter_count: 21,
    subfilter_length: 104,
    block_in: 5,
    block_out: 21,
    is_halfband: false,
    output_shift: 0,
    coefficients: Taps::Q31(&SRC_INT32_21_5_4535_5000_FIR),
};

static SRC_INT32_21_5_4535_5000_FIR: [i32; 2184] = [
    -46288, 73523, -104226, 135885, -164809, 186051,
    -193404, 179495, -135974, 53824, 76213, -263097,
    514840, -837775, 1235756, -1709336, 2254947, -2864135,
    3522898, -4211167, 4902488, -5563933, 6156289, -6634538,
    6948662, -7044741, 6866371, -6356339, 5458522, -4119960,
    2293010, 62481, -2977093, 6469929, -10546986, 15199898,
    -20405146, 26123818, -32301996, 38871858, -45753573, 52858141,
    -60091389, 67359568, -74577487, 81681234, -88650462, 95553303,
    -102653627, 110727305, -122328562, 150821514, 2045922260, 49770641,
    -73564931, 80111748, -81612379, 80607629, -78010546, 74275051,
    -69688376, 64466777, -58791816, 52824947, -46713137, 40590495,
    -34578096, 28783082, -23297598, 18197877, -13543646, 9377953,
    -5727446, 2603100, -1362, -2094347, 3711831, -4888122,
    5667351, -6098588, 6233725, -6125487, 5825620, -5383324,
    4843958, -4248043, 3630570, -3020609, 2441194, -1909470,
    1437044, -1030518, 692143, -420556, 211559, -58882,
    -45082, 108615, -140102, 147562, -138290, 118607,
    -93720, 67671, -48354, 78057, -112915, 150869,
    -188656, 221687, -243996, 248273, -225997, 167690,
    -63287, -97361, 323871, -624608, 1005871, -1471035,
    2019668, -2646671, 3341493, -4087465, 4861300, -5632813,
    6364896, -7013782, 7529629, -7857416, 7938163, -7710448,
    7112175, -6082556, 4564225, -2505401, -137985, 3400316,
    -7304572, 11860993, -17066252, 22903268, -29341817, 36340156,
    -43847916, 51810749, -60177489, 68911363, -78008260, 87528706,
    -97659170, 108843930, -122112840, 140073176, -170976246, 259039542,
    2032057170, -43241378, -25605732, 48864843, -59444790, 64338470,
    -65980776, 65482750, -63459504, 60308416, -56319519, 51724125,
    -46717555, 41469934, -36131163, 30832978, -25689580, 20797673,
    -16236356, 12067144, -8334265, 5065304, -2272204, -47381,
    1908446, -3336748, 4366772, -5039607, 5400830, -5498459,
    5381055, -5096025, 4688165, -4198486, 3663329, -3113777,
    2575348, -2067957, 1606105, -1199266, 852418, -566694,
    340084, -168166, 44818, 37117, -85237, 107079,
    -109716, 99463, -81679, 60677, -49470, 81116,
    -119536, 163170, -209253, 253651, -290757, 313471,
    -313265, 280380, -204138, 73382, 122937, -395071,
    751667, -1198885, 1739471, -2371817, 3089069, -3878323,
    4719956, -5587155, 6445682, -7253910, 7963179, -8518464,
    8859379, -8921498, 8637962, -7941327, 6765591, -5048311,
    2732728, 230236, -3880204, 8245963, -13344617, 19181472,
    -25750886, 33038399, -41024628, 49691703, -59033616, 69073083,
    -79890144, 91673886, -104824175, 120174595, -139554644, 167515224,
    -218546566, 373432573, 2004496317, -127473290, 20683255, 17617174,
    -36617619, 47097012, -52826091, 55502061, -56034717, 54984415,
    -52738387, 49590022, -45777152, 41501269, -36937262, 32238234,
    -27537727, 22950657, -18573654, 14485259, -10746225, 7400043,
    -4473787, 1979273, 85478, -1734522, 2992081, -3890504,
    4468191, -4767534, 4832968, -4709176, 4439504, -4064635,
    3621527, -3142640, 2655447, -2182214, 1740019, -1340990,
    992708, -698749, 459310, -271879, 131921, -33531,
    -29964, 65478, -79729, 78901, -68406, 52734,
    -49564, 82572, -123872, 172442, -226074, 281178,
    -332621, 373653, -395910, 389541, -343454, 245699,
    -83993, -153621, 477990, -897968, 1419457, -2044407,
    2769837, -3586900, 4480067, -5426465, 6395437, -7348356,
    8238730, -9012639, 9609497, -9963154, 10003303, -9657159,
    8851359, -7513993, 5576670, -2976516, -342048, 4425904,
    -9312403, 15029325, -21595968, 29025780, -37331212, 46531902,
    -56668146, 67823335, -80162843, 94005563, -109966620, 129273669,
    -154573074, 192435725, -264051666, 492899971, 1963575893, -202322171,
    64503169, -13019933, -13599419, 29246783, -38829367, 44551532,
    -47579904, 48616887, -48133890, 46477438, -43921215, 40692820,
    -36987799, 32976968, -28810111, 24617726, -20511781, 16586067,
    -12916462, 9561346, -6562249, 3944796, -1719957, -114432,
    1571925, -2675557, 3455837, -3948736, 4193707, -4231844,
    4104196, -3850311, 3507024, -3107517, 2680657, -2250595,
    1836625, -1453261, 1110511, -814297, 566993, -368026,
    214516, -101912, 24583, 23635, -48980, 57390,
    -54220, 44050, -48578, 82325, -125750, 178393,
    -238659, 303577, -368598, 427457, -472122, 492843,
    -478328, 416060, -292754, 94965, 190165, -574036,
    1065619, -1670424, 2389437, -3218087, 4145287, -5152602,
    6213603, -7293463, 8348815, -9327940, 10171274, -10812266,
    11178555, -11193454, 10777677, -9851235, 8335423, -6154756,
    3238723, 476821, -5048853, 10527239, -16956044, 24376637,
    -32833453, 42383832, -53114463, 65169206, -78797959, 94447640,
    -112945480, 135908921, -166800285, 214245626, -306492651, 616246377,
    1909794064, -267329113, 105132981, -42465248, 9148555, 11156271,
    -24285502, 32865857, -38279379, 41347399, -42611103, 42460286,
    -41197193, 39069785, -36289539, 33040999, -29486768, 25769994,
    -22015494, 18330216, -14803476, 11507221, -8496471, 5810030,
    -3471492, 1490529, 135559, -1420103, 2385184, -3059677,
    3477318, -3674820, 3690140, -3560914, 3323128, -3010021,
    2651267, -2272409, 1894552, -1534287, 1203825, -911292,
    661168, -454807, 291023, -166689, 77313, -17591,
    -18121, 35401, -39445, 34838, -46480, 80311,
    -125040, 180793, -246624, 320248, -397796, 473623,
    -540186, 588031, -605890, 580917, -499076, 345684,
    -106108, -233399, 684735, -1256890, 1954843, -2778429,
    3721268, -4769772, 5902312, -7088593, 8289275, -9455898,
    10531135, -11449373, 12137653, -12516909, 12503498, -12010931,
    10951718, -9239222, 6789346, -3521881, -638741, 5763604,
    -11920825, 19179100, -27614281, 37320744, -48430585, 61146484,
    -75800022, 92961223, -113661063, 139892958, -175914745, 232396605,
    -344875557, 742197100, 1843803731, -322182637, 141938832, -70177643,
    31181103, -6808409, -9495374, 20690957, -28331937, 33333889,
    -36292360, 37629898, -37669547, 36673549, -34864313, 32435869,
    -29559984, 26389285, -23058690, 19685969, -16371918, 13200462,
    -10238879, 7538256, -5134232, 3048026, -1287756, -150021,
    1278579, -2119190, 2699240, -3050375, 3206728, -3203297,
    3074510, -2853006, 2568671, -2247920, 1913236, -1582940,
    1271179, -988101, 740179, -530648, 360017, -226626,
    127197, -57376, 12216, 13399, -24409, 25314,
    -43260, 76498, -121667, 179479, -249669, 330693,
    -419446, 511019, -598519, 672976, -723367, 736768,
    -698663, 593409, -404865, 117189, 284237, -811744,
    1474238, -2276012, 3215563, -4284468, 5466377, -6736175,
    8059375, -9391786, 10679489, -11859149, 12858678, -13598224,
    13991459, -13947105, 13370621, -12165916, 10236944, -7488979,
    3829303, 833057, -6589034, 13533441, -21772271, 31435406,
    -42698280, 55819310, -71206857, 89545986, -112057753, 141087901,
    -181648715, 246392737, -378227634, 869414877, 1766403056, -366719831,
    174381677, -95665100, 52077335, -24290679, 5240237, 8278902,
    -17946679, 24747282, -29314590, 32092978, -33418264, 33560684,
    -32748421, 31180597, -29034330, 26468383, -23624848, 20629770,
    -17593244, 14609355, -11756166, 9095912, -6675454, 4527037,
    -2669344, 1108809, 158845, -1146925, 1875978, -2371993,
    2664639, -2785604, 2767089, -2640492, 2435319, -2178328,
    1892920, -1598766, 1311654, -1043530, 802713, -594229,
    420256, -280614, 173288, -94946, 41425, -8163,
    -9433, 15690, -38932, 70897, -115608, 174364,
    -247593, 334533, -432915, 538675, -645709, 745718,
    -828142, 880237, -887286, 832987, -699999, 470670,
    -127929, -343683, 956863, -1720318, 2637500, -3705368,
    4913226, -6241691, 7661868, -9134759, 10610972, -12030753,
    13324354, -14412752, 15208673, -15617885, 15540679, -14873419,
    13510011, -11343080, 8264567, -4165379, -1066487, 7550161,
    -15419804, 24838433, -36021695, 49279238, -65089294, 84240784,
    -108125911, 139409163, -183794865, 255801532, -405613676, 996517777,
    1678523914, -400925203, 202023152, -118492584, 71448286, -40950333,
    19626615, -4117205, -7338686, 15767902, -21826393, 25969290,
    -28537075, 29801646, -29991748, 29307153, -27926444, 26011077,
    -23707265, 21146633, -18446224, 15708266, -13019930, 10453239,
    -8065239, 5898461, -3981689, 2331024, -951193, -162945,
    1024749, -1654085, 2075606, -2317090, 2407895, -2377569,
    2254657, -2065728, 1834632, -1581987, 1324893, -1076843,
    847813, -644507, 470704, -327692, 214741, -129595,
    68942, -28856, 5177, 6174, -33539, 63554,
    -106899, 165438, -240296, 331518, -437730, 555799,
    -680545, 804509, -917812, 1008141, -1060871, 1059354,
    -985378, 819819, -543465, 138003, 412839, -1122048,
    1998011, -3043181, 4252780, -5613602, 7102971, -8687914,
    10324605, -11958106, 13522447, -14941047, 16127458, -16986400,
    17415004, -17304173, 16539891, -15004274, 12576083, -9130272,
    4535996, 1347841, -8680930, 17656250, -28525509, 41643739,
    -57550198, 77123483, -101902888, 134828258, -182211894, 260264130,
    -426152121, 1122097975, 1581218430, -424927308, 224529590, -138288662,
    88943751, -56469929, 33380861, -16248301, 3275373, 6581730,
    -13984906, 19389090, -23131418, 25479206, -26656622, 26859687,
    -26264573, 25031969, -23309095, 21230366, -18917298, 16478100,
    -14007192, 11584846, -9277056, 7135692, -5198982, 3492288,
    -2029170, 812686, 163131, -911682, 1452160, -1807917,
    2004913, -2070277, 2031040, -1913058, 1740155, -1533482,
    1311100, -1087763, 874897, -680727, 510544, -367059,
    250827, -160693, 94254, -48285, 19130, -3038,
    -27148, 54559, -95633, 152772, -227785, 321537,
    -433583, 561802, -702048, 847860, -990243, 1117566,
    -1215584, 1267631, -1254978, 1157392, -953879, 623610,
    -147028, -492918, 1309429, -2310453, 3497282, -4863205,
    6392279, -8058273, 9823858, -11640064, 13446071, -15169315,
    16725949, -18021584, 18952284, -19405702, 19262204, -18395789,
    16674486, -13959833, 10104795, -4949182, -1688974, 10028690,
    -20352648, 33054152, -48722842, 68310007, -93473130, 127374553,
    -176828999, 259504459, -439030668, 1244741105, 1475643843, -438993245,
    241674165, -154750777, 104258236, -70560620, 46237323, -27874276,
    13681601, -2623401, -5952550, 12490390, -17316185, 20686649,
    -22816422, 23893508, -24087890, 23556075, -22443187, 20883607,
    -19000777, 16906616, -14700809, 12470179, -10288255, 8215131,
    -6297625, 4569774, -3053627, 1760310, -691301, -160126,
    807370, -1268937, 1566904, -1725469, 1769628, -1724022,
    1611978, -1454759, 1271021, -1076477, 883759, -702439,
    539194, -398092, 280941, -187701, 116908, -66090,
    32163, -11768, -19851, 44040, -81960, 136517,
    -210177, 304619, -420351, 556314, -709494, 874569,
    -1043617, 1205924, -1347916, 1453236, -1503006, 1476274,
    -1350664, 1103222, -711462, 154569, 585250, -1521333,
    2661070, -4004439, 5542609, -7256680, 9116628, -11080496,
    13093884, -15089762, 16988610, -18698874, 20117680, -21131728,
    21618214, -21445589, 20473857, -18553984, 15525783, -11213298,
    5416086, 2106311, -11661604, 23673126, -38768638, 57952598,
    -82967324, 117135919, -167649110, 253337170, -443521124, 1363045905,
    1363045905, -443521124, 253337170, -167649110, 117135919, -82967324,
    57952598, -38768638, 23673126, -11661604, 2106311, 5416086,
    -11213298, 15525783, -18553984, 20473857, -21445589, 21618214,
    -21131728, 20117680, -18698874, 16988610, -15089762, 13093884,
    -11080496, 9116628, -7256680, 5542609, -4004439, 2661070,
    -1521333, 585250, 154569, -711462, 1103222, -1350664,
    1476274, -1503006, 1453236, -1347916, 1205924, -1043617,
    874569, -709494, 556314, -420351, 304619, -210177,
    136517, -81960, 44040, -19851, -11768, 32163,
    -66090, 116908, -187701, 280941, -398092, 539194,
    -702439, 883759, -1076477, 1271021, -1454759, 1611978,
    -1724022, 1769628, -1725469, 1566904, -1268937, 807370,
    -160126, -691301, 1760310, -3053627, 4569774, -6297625,
    8215131, -10288255, 12470179, -14700809, 16906616, -19000777,
    20883607, -22443187, 23556075, -24087890, 23893508, -22816422,
    20686649, -17316185, 12490390, -5952550, -2623401, 13681601,
    -27874276, 46237323, -70560620, 104258236, -154750777, 241674165,
    -438993245, 1475643843, 1244741105, -439030668, 259504459, -176828999,
    127374553, -93473130, 68310007, -48722842, 33054152, -20352648,
    10028690, -1688974, -4949182, 10104795, -13959833, 16674486,
    -18395789, 19262204, -19405702, 18952284, -18021584, 16725949,
    -15169315, 13446071, -11640064, 9823858, -8058273, 6392279,
    -4863205, 3497282, -2310453, 1309429, -492918, -147028,
    623610, -953879, 1157392, -1254978, 1267631, -1215584,
    1117566, -990243, 847860, -702048, 561802, -433583,
    321537, -227785, 152772, -95633, 54559, -27148,
    -3038, 19130, -48285, 94254, -160693, 250827,
    -367059, 510544, -680727, 874897, -1087763, 1311100,
    -1533482, 1740155, -1913058, 2031040, -2070277, 2004913,
    -1807917, 1452160, -911682, 163131, 812686, -2029170,
    3492288, -5198982, 7135692, -9277056, 11584846, -14007192,
    16478100, -18917298, 21230366, -23309095, 25031969, -26264573,
    26859687, -26656622, 25479206, -23131418, 19389090, -13984906,
    6581730, 3275373, -16248301, 33380861, -56469929, 88943751,
    -138288662, 224529590, -424927308, 1581218430, 1122097975, -426152121,
    260264130, -182211894, 134828258, -101902888, 77123483, -57550198,
    41643739, -28525509, 17656250, -8680930, 1347841, 4535996,
    -9130272, 12576083, -15004274, 16539891, -17304173, 17415004,
    -16986400, 16127458, -14941047, 13522447, -11958106, 10324605,
    -8687914, 7102971, -5613602, 4252780, -3043181, 1998011,
    -1122048, 412839, 138003, -543465, 819819, -985378,
    1059354, -1060871, 1008141, -917812, 804509, -680545,
    555799, -437730, 331518, -240296, 165438, -106899,
    63554, -33539, 6174, 5177, -28856, 68942,
    -129595, 214741, -327692, 470704, -644507, 847813,
    -1076843, 1324893, -1581987, 1834632, -2065728, 2254657,
    -2377569, 2407895, -2317090, 2075606, -1654085, 1024749,
    -162945, -951193, 2331024, -3981689, 5898461, -8065239,
    10453239, -13019930, 15708266, -18446224, 21146633, -23707265,
    26011077, -27926444, 29307153, -29991748, 29801646, -28537075,
    25969290, -21826393, 15767902, -7338686, -4117205, 19626615,
    -40950333, 71448286, -118492584, 202023152, -400925203, 1678523914,
    996517777, -405613676, 255801532, -183794865, 139409163, -108125911,
    84240784, -65089294, 49279238, -36021695, 24838433, -15419804,
    7550161, -1066487, -4165379, 8264567, -11343080, 13510011,
    -14873419, 15540679, -15617885, 15208673, -14412752, 13324354,
    -12030753, 10610972, -9134759, 7661868, -6241691, 4913226,
    -3705368, 2637500, -1720318, 956863, -343683, -127929,
    470670, -699999, 832987, -887286, 880237, -828142,
    745718, -645709, 538675, -432915, 334533, -247593,
    174364, -115608, 70897, -38932, 15690, -9433,
    -8163, 41425, -94946, 173288, -280614, 420256,
    -594229, 802713, -1043530, 1311654, -1598766, 1892920,
    -2178328, 2435319, -2640492, 2767089, -2785604, 2664639,
    -2371993, 1875978, -1146925, 158845, 1108809, -2669344,
    4527037, -6675454, 9095912, -11756166, 14609355, -17593244,
    20629770, -23624848, 26468383, -29034330, 31180597, -32748421,
    33560684, -33418264, 32092978, -29314590, 24747282, -17946679,
    8278902, 5240237, -24290679, 52077335, -95665100, 174381677,
    -366719831, 1766403056, 869414877, -378227634, 246392737, -181648715,
    141087901, -112057753, 89545986, -71206857, 55819310, -42698280,
    31435406, -21772271, 13533441, -6589034, 833057, 3829303,
    -7488979, 10236944, -12165916, 13370621, -13947105, 13991459,
    -13598224, 12858678, -11859149, 10679489, -9391786, 8059375,
    -6736175, 5466377, -4284468, 3215563, -2276012, 1474238,
    -811744, 284237, 117189, -404865, 593409, -698663,
    736768, -723367, 672976, -598519, 511019, -419446,
    330693, -249669, 179479, -121667, 76498, -43260,
    25314, -24409, 13399, 12216, -57376, 127197,
    -226626, 360017, -530648, 740179, -988101, 1271179,
    -1582940, 1913236, -2247920, 2568671, -2853006, 3074510,
    -3203297, 3206728, -3050375, 2699240, -2119190, 1278579,
    -150021, -1287756, 3048026, -5134232, 7538256, -10238879,
    13200462, -16371918, 19685969, -23058690, 26389285, -29559984,
    32435869, -34864313, 36673549, -37669547, 37629898, -36292360,
    33333889, -28331937, 20690957, -9495374, -6808409, 31181103,
    -70177643, 141938832, -322182637, 1843803731, 742197100, -344875557,
    232396605, -175914745, 139892958, -113661063, 92961223, -75800022,
    61146484, -48430585, 37320744, -27614281, 19179100, -11920825,
    5763604, -638741, -3521881, 6789346, -9239222, 10951718,
    -12010931, 12503498, -12516909, 12137653, -11449373, 10531135,
    -9455898, 8289275, -7088593, 5902312, -4769772, 3721268,
    -2778429, 1954843, -1256890, 684735, -233399, -106108,
    345684, -499076, 580917, -605890, 588031, -540186,
    473623, -397796, 320248, -246624, 180793, -125040,
    80311, -46480, 34838, -39445, 35401, -18121,
    -17591, 77313, -166689, 291023, -454807, 661168,
    -911292, 1203825, -1534287, 1894552, -2272409, 2651267,
    -3010021, 3323128, -3560914, 3690140, -3674820, 3477318,
    -3059677, 2385184, -1420103, 135559, 1490529, -3471492,
    5810030, -8496471, 11507221, -14803476, 18330216, -22015494,
    25769994, -29486768, 33040999, -36289539, 39069785, -41197193,
    42460286, -42611103, 41347399, -38279379, 32865857, -24285502,
    11156271, 9148555, -42465248, 105132981, -267329113, 1909794064,
    616246377, -306492651, 214245626, -166800285, 135908921, -112945480,
    94447640, -78797959, 65169206, -53114463, 42383832, -32833453,
    24376637, -16956044, 10527239, -5048853, 476821, 3238723,
    -6154756, 8335423, -9851235, 10777677, -11193454, 11178555,
    -10812266, 10171274, -9327940, 8348815, -7293463, 6213603,
    -5152602, 4145287, -3218087, 2389437, -1670424, 1065619,
    -574036, 190165, 94965, -292754, 416060, -478328,
    492843, -472122, 427457, -368598, 303577, -238659,
    178393, -125750, 82325, -48578, 44050, -54220,
    57390, -48980, 23635, 24583, -101912, 214516,
    -368026, 566993, -814297, 1110511, -1453261, 1836625,
    -2250595, 2680657, -3107517, 3507024, -3850311, 4104196,
    -4231844, 4193707, -3948736, 3455837, -2675557, 1571925,
    -114432, -1719957, 3944796, -6562249, 9561346, -12916462,
    16586067, -20511781, 24617726, -28810111, 32976968, -36987799,
    40692820, -43921215, 46477438, -48133890, 48616887, -47579904,
    44551532, -38829367, 29246783, -13599419, -13019933, 64503169,
    -202322171, 1963575893, 492899971, -264051666, 192435725, -154573074,
    129273669, -109966620, 94005563, -80162843, 67823335, -56668146,
    46531902, -37331212, 29025780, -21595968, 15029325, -9312403,
    4425904, -342048, -2976516, 5576670, -7513993, 8851359,
    -9657159, 10003303, -9963154, 9609497, -9012639, 8238730,
    -7348356, 6395437, -5426465, 4480067, -3586900, 2769837,
    -2044407, 1419457, -897968, 477990, -153621, -83993,
    245699, -343454, 389541, -395910, 373653, -332621,
    281178, -226074, 172442, -123872, 82572, -49564,
    52734, -68406, 78901, -79729, 65478, -29964,
    -33531, 131921, -271879, 459310, -698749, 992708,
    -1340990, 1740019, -2182214, 2655447, -3142640, 3621527,
    -4064635, 4439504, -4709176, 4832968, -4767534, 4468191,
    -3890504, 2992081, -1734522, 85478, 1979273, -4473787,
    7400043, -10746225, 14485259, -18573654, 22950657, -27537727,
    32238234, -36937262, 41501269, -45777152, 49590022, -52738387,
    54984415, -56034717, 55502061, -52826091, 47097012, -36617619,
    17617174, 20683255, -127473290, 2004496317, 373432573, -218546566,
    167515224, -139554644, 120174595, -104824175, 91673886, -79890144,
    69073083, -59033616, 49691703, -41024628, 33038399, -25750886,
    19181472, -13344617, 8245963, -3880204, 230236, 2732728,
    -5048311, 6765591, -7941327, 8637962, -8921498, 8859379,
    -8518464, 7963179, -7253910, 6445682, -5587155, 4719956,
    -3878323, 3089069, -2371817, 1739471, -1198885, 751667,
    -395071, 122937, 73382, -204138, 280380, -313265,
    313471, -290757, 253651, -209253, 163170, -119536,
    81116, -49470, 60677, -81679, 99463, -109716,
    107079, -85237, 37117, 44818, -168166, 340084,
    -566694, 852418, -1199266, 1606105, -2067957, 2575348,
    -3113777, 3663329, -4198486, 4688165, -5096025, 5381055,
    -5498459, 5400830, -5039607, 4366772, -3336748, 1908446,
    -47381, -2272204, 5065304, -8334265, 12067144, -16236356,
    20797673, -25689580, 30832978, -36131163, 41469934, -46717555,
    51724125, -56319519, 60308416, -63459504, 65482750, -65980776,
    64338470, -59444790, 48864843, -25605732, -43241378, 2032057170,
    259039542, -170976246, 140073176, -122112840, 108843930, -97659170,
    87528706, -78008260, 68911363, -60177489, 51810749, -43847916,
    36340156, -29341817, 22903268, -17066252, 11860993, -7304572,
    3400316, -137985, -2505401, 4564225, -6082556, 7112175,
    -7710448, 7938163, -7857416, 7529629, -7013782, 6364896,
    -5632813, 4861300, -4087465, 3341493, -2646671, 2019668,
    -1471035, 1005871, -624608, 323871, -97361, -63287,
    167690, -225997, 248273, -243996, 221687, -188656,
    150869, -112915, 78057, -48354, 67671, -93720,
    118607, -138290, 147562, -140102, 108615, -45082,
    -58882, 211559, -420556, 692143, -1030518, 1437044,
    -1909470, 2441194, -3020609, 3630570, -4248043, 4843958,
    -5383324, 5825620, -6125487, 6233725, -6098588, 5667351,
    -4888122, 3711831, -2094347, -1362, 2603100, -5727446,
    9377953, -13543646, 18197877, -23297598, 28783082, -34578096,
    40590495, -46713137, 52824947, -58791816, 64466777, -69688376,
    74275051, -78010546, 80607629, -81612379, 80111748, -73564931,
    49770641, 2045922260, 150821514, -122328562, 110727305, -102653627,
    95553303, -88650462, 81681234, -74577487, 67359568, -60091389,
    52858141, -45753573, 38871858, -32301996, 26123818, -20405146,
    15199898, -10546986, 6469929, -2977093, 62481, 2293010,
    -4119960, 5458522, -6356339, 6866371, -7044741, 6948662,
    -6634538, 6156289, -5563933, 4902488, -4211167, 3522898,
    -2864135, 2254947, -1709336, 1235756, -837775, 514840,
    -263097, 76213, 53824, -135974, 179495, -193404,
    186051, -164809, 135885, -104226, 73523, -46288,
];
