//! Higher-order functions which don't build a collection, but instead yield
//! their values to a callback.

/// Yields the first `n` Fibonacci numbers: 1, 1, 2, 3, 5, ...
///
/// The numbers saturate at [u64::MAX] past the 93rd one.
pub fn fib(n: u32, mut f: impl FnMut(u64)) {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 0..n {
        f(a);
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
}

/// Returns true if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    // n > 2, and odd
    let mut candidate = 3;
    while candidate <= n / candidate {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// Yields all the primes in `2..n`.
pub fn primes_less_than(n: u64, mut f: impl FnMut(u64)) {
    for i in 2..n {
        if is_prime(i) {
            f(i)
        }
    }
}

/// Yields all the non-primes in `1..n`.
pub fn composites_less_than(n: u64, mut f: impl FnMut(u64)) {
    for i in 1..n {
        if !is_prime(i) {
            f(i)
        }
    }
}

pub fn each_with_index<T>(items: &[T], mut f: impl FnMut(usize, &T)) {
    for (i, x) in items.iter().enumerate() {
        f(i, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(run: impl FnOnce(&mut dyn FnMut(u64))) -> Vec<u64> {
        let mut v = Vec::new();
        run(&mut |x| v.push(x));
        v
    }

    #[test]
    fn fibonacci() {
        assert_eq!(collect(|f| fib(0, f)), Vec::<u64>::new());
        assert_eq!(collect(|f| fib(1, f)), vec![1]);
        assert_eq!(collect(|f| fib(2, f)), vec![1, 1]);
        assert_eq!(collect(|f| fib(5, f)), vec![1, 1, 2, 3, 5]);
        assert_eq!(collect(|f| fib(10, f)).last(), Some(&55));
    }

    #[test]
    fn primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(!is_prime(32883));
        assert!(is_prime(32887));
        assert_eq!(collect(|f| primes_less_than(10, f)), vec![2, 3, 5, 7]);
        assert_eq!(collect(|f| primes_less_than(2, f)), Vec::<u64>::new());
    }

    #[test]
    fn composites() {
        assert_eq!(collect(|f| composites_less_than(10, f)), vec![1, 4, 6, 8, 9]);
        assert_eq!(collect(|f| composites_less_than(0, f)), Vec::<u64>::new());
    }

    #[test]
    fn indexed() {
        let mut lines = Vec::new();
        each_with_index(&["a", "b", "c"], |i, s| lines.push(format!("{}. {}", i + 1, s)));
        assert_eq!(lines, vec!["1. a", "2. b", "3. c"]);
    }
}
