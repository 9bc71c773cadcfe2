/// Computes `n!` by recursion, wrapping modulo 256 at every step.
///
/// Base case: `factorial(0) = factorial(1) = 1`.
/// Recursive case: `factorial(n) = n * factorial(n - 1)`.
///
/// Inputs above 5 overflow the 8-bit range; the result is the true factorial
/// truncated to 8 bits (e.g. `factorial(6) = 720 mod 256 = 208`), never a panic.
/// Recursion depth equals `n`, so at most 255 frames.
pub fn factorial(n: u8) -> u8 {
    if n <= 1 {
        return 1;
    }

    n.wrapping_mul(factorial(n - 1))
}
