pub const FACTORIAL_INPUTS: [u8; 6] = [0, 1, 2, 3, 4, 5];
pub const MULTIPLY_INPUTS: [(u8, u8); 7] =
    [(0, 5), (5, 0), (1, 7), (3, 4), (5, 6), (7, 8), (10, 10)];

pub const FACTORIAL_TITLE: &str = "Factorial Calculator";
pub const FACTORIAL_RULE: &str = "====================";
pub const FACTORIAL_NOTE: &str = "Note: Values beyond 5! exceed 8-bit range (max 255)";

pub const MULTIPLY_TITLE: &str = "Recursive Multiplication Calculator";
pub const MULTIPLY_RULE: &str = "====================================";
pub const MULTIPLY_NOTE: &str = "Note: Results are limited to 8-bit range (max 255)";
