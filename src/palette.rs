//! Fixed rainbow palette used for depth maps.
//!
//! Entry `i` is the gnuplot/matplotlib "rainbow" curve sampled at `x = i / 255`:
//! `r = |2x - 0.5|`, `g = sin(pi x)`, `b = cos(pi x / 2)`, each clamped to
//! `[0, 1]`, scaled by 255 and rounded half away from zero. Ties are decided
//! on the exact value: every red entry is `|2i - 127.5|`, and blue at 170 is
//! `255 * cos(pi / 3) = 127.5`. Index 0 is violet, index 255 is red.

/// Color written for pixels that fail the validity mask.
pub const MASKED: [u8; 3] = [0, 0, 0];

pub static RAINBOW: [[u8; 3]; 256] = [
    [128, 0, 255], [126, 3, 255], [124, 6, 255], [122, 9, 255],
    [120, 13, 255], [118, 16, 255], [116, 19, 255], [114, 22, 255],
    [112, 25, 255], [110, 28, 255], [108, 31, 255], [106, 34, 254],
    [104, 38, 254], [102, 41, 254], [100, 44, 254], [98, 47, 254],
    [96, 50, 254], [94, 53, 254], [92, 56, 253], [90, 59, 253],
    [88, 62, 253], [86, 65, 253], [84, 68, 253], [82, 71, 252],
    [80, 74, 252], [78, 77, 252], [76, 80, 252], [74, 83, 251],
    [72, 86, 251], [70, 89, 251], [68, 92, 251], [66, 95, 250],
    [64, 98, 250], [62, 101, 250], [60, 104, 249], [58, 107, 249],
    [56, 109, 249], [54, 112, 248], [52, 115, 248], [50, 118, 248],
    [48, 121, 247], [46, 123, 247], [44, 126, 247], [42, 129, 246],
    [40, 132, 246], [38, 134, 245], [36, 137, 245], [34, 140, 244],
    [32, 142, 244], [30, 145, 243], [28, 147, 243], [26, 150, 243],
    [24, 152, 242], [22, 155, 242], [20, 157, 241], [18, 160, 241],
    [16, 162, 240], [14, 165, 239], [12, 167, 239], [10, 169, 238],
    [8, 172, 238], [6, 174, 237], [4, 176, 237], [2, 179, 236],
    [1, 181, 235], [3, 183, 235], [5, 185, 234], [7, 187, 234],
    [9, 190, 233], [11, 192, 232], [13, 194, 232], [15, 196, 231],
    [17, 198, 230], [19, 200, 230], [21, 202, 229], [23, 203, 228],
    [25, 205, 228], [27, 207, 227], [29, 209, 226], [31, 211, 225],
    [33, 213, 225], [35, 214, 224], [37, 216, 223], [39, 218, 222],
    [41, 219, 222], [43, 221, 221], [45, 222, 220], [47, 224, 219],
    [49, 225, 218], [51, 227, 218], [53, 228, 217], [55, 230, 216],
    [57, 231, 215], [59, 232, 214], [61, 234, 213], [63, 235, 213],
    [65, 236, 212], [67, 237, 211], [69, 238, 210], [71, 239, 209],
    [73, 241, 208], [75, 242, 207], [77, 243, 206], [79, 243, 205],
    [81, 244, 204], [83, 245, 203], [85, 246, 203], [87, 247, 202],
    [89, 248, 201], [91, 248, 200], [93, 249, 199], [95, 250, 198],
    [97, 250, 197], [99, 251, 196], [101, 251, 195], [103, 252, 194],
    [105, 252, 193], [107, 253, 192], [109, 253, 191], [111, 254, 190],
    [113, 254, 188], [115, 254, 187], [117, 254, 186], [119, 255, 185],
    [121, 255, 184], [123, 255, 183], [125, 255, 182], [127, 255, 181],
    [129, 255, 180], [131, 255, 179], [133, 255, 178], [135, 255, 176],
    [137, 255, 175], [139, 254, 174], [141, 254, 173], [143, 254, 172],
    [145, 254, 171], [147, 253, 169], [149, 253, 168], [151, 252, 167],
    [153, 252, 166], [155, 251, 165], [157, 251, 164], [159, 250, 162],
    [161, 250, 161], [163, 249, 160], [165, 248, 159], [167, 248, 157],
    [169, 247, 156], [171, 246, 155], [173, 245, 154], [175, 244, 152],
    [177, 243, 151], [179, 243, 150], [181, 242, 149], [183, 241, 147],
    [185, 239, 146], [187, 238, 145], [189, 237, 143], [191, 236, 142],
    [193, 235, 141], [195, 234, 140], [197, 232, 138], [199, 231, 137],
    [201, 230, 136], [203, 228, 134], [205, 227, 133], [207, 225, 132],
    [209, 224, 130], [211, 222, 129], [213, 221, 128], [215, 219, 126],
    [217, 218, 125], [219, 216, 123], [221, 214, 122], [223, 213, 121],
    [225, 211, 119], [227, 209, 118], [229, 207, 116], [231, 205, 115],
    [233, 203, 114], [235, 202, 112], [237, 200, 111], [239, 198, 109],
    [241, 196, 108], [243, 194, 107], [245, 192, 105], [247, 190, 104],
    [249, 187, 102], [251, 185, 101], [253, 183, 99], [255, 181, 98],
    [255, 179, 96], [255, 176, 95], [255, 174, 94], [255, 172, 92],
    [255, 169, 91], [255, 167, 89], [255, 165, 88], [255, 162, 86],
    [255, 160, 85], [255, 157, 83], [255, 155, 82], [255, 152, 80],
    [255, 150, 79], [255, 147, 77], [255, 145, 76], [255, 142, 74],
    [255, 140, 73], [255, 137, 71], [255, 134, 70], [255, 132, 68],
    [255, 129, 67], [255, 126, 65], [255, 123, 64], [255, 121, 62],
    [255, 118, 61], [255, 115, 59], [255, 112, 58], [255, 109, 56],
    [255, 107, 55], [255, 104, 53], [255, 101, 51], [255, 98, 50],
    [255, 95, 48], [255, 92, 47], [255, 89, 45], [255, 86, 44],
    [255, 83, 42], [255, 80, 41], [255, 77, 39], [255, 74, 38],
    [255, 71, 36], [255, 68, 34], [255, 65, 33], [255, 62, 31],
    [255, 59, 30], [255, 56, 28], [255, 53, 27], [255, 50, 25],
    [255, 47, 24], [255, 44, 22], [255, 41, 20], [255, 38, 19],
    [255, 34, 17], [255, 31, 16], [255, 28, 14], [255, 25, 13],
    [255, 22, 11], [255, 19, 9], [255, 16, 8], [255, 13, 6],
    [255, 9, 5], [255, 6, 3], [255, 3, 2], [255, 0, 0],
];

/// Look up the palette color for an 8-bit intensity.
#[inline]
pub fn rainbow(index: u8) -> [u8; 3] {
    RAINBOW[index as usize]
}
