/// Computes `a * b` as `b` recursive additions of `a`, wrapping modulo 256.
///
/// Base case: `recursive_multiply(a, 0) = 0`.
/// Recursive case: `recursive_multiply(a, b) = a + recursive_multiply(a, b - 1)`.
///
/// Recursion depth equals `b`, so at most 255 frames.
pub fn recursive_multiply(a: u8, b: u8) -> u8 {
    if b == 0 {
        return 0;
    }

    a.wrapping_add(recursive_multiply(a, b - 1))
}
