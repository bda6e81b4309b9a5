//! Fixed parameters of the experiments

/// Haggai 1:1, with the surrounding newlines kept.
pub const STARTING_MESSAGE: &str = "
In the second year of Daryavesh HaMelech, in the sixth month, in yom echad of the month, came the Devar Hashem by Chaggai HaNavi unto Zerubavel ben Sh'altiel, Governor of Yehudah, and to Yehoshua ben Yehotzadak, the Kohen HaGadol, saying:
";

/// Number of hops (people, or groups) in one chain
pub const CHAIN_LENGTH: usize = 150;

/// Number of chain runs averaged per experiment
pub const TRIALS: usize = 10;

/// Chance that one hop distorts the message
pub const DISTORTION_PROBABILITY: f64 = 0.30;

/// Chance that a distortion is a substitution rather than an insertion
pub const SUBSTITUTION_PROBABILITY: f64 = 0.5;

/// Chance that a reviewer repairs one mismatched character
pub const CORRECTION_PROBABILITY: f64 = 0.50;

/// People per group; everyone but the one who distorted reviews
pub const GROUP_SIZE: usize = 10;

/// Width of the dashed line closing each report block
pub const SEPARATOR_WIDTH: usize = 57;
