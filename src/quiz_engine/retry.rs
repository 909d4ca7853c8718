//! Bounded retry. Every redraw or padding loop in the engine goes through
//! [`try_up_to`] so no call can spin forever.

/// Call `f` up to `attempts` times (passing the attempt index) and return the
/// first `Some`. Returns `None` once the budget is spent.
pub fn try_up_to<T>(attempts: usize, mut f: impl FnMut(usize) -> Option<T>) -> Option<T> {
    (0..attempts).find_map(|attempt| f(attempt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_first_success() {
        let mut calls = 0;
        let got = try_up_to(10, |i| {
            calls += 1;
            (i == 3).then_some(i * 2)
        });
        assert_eq!(got, Some(6));
        assert_eq!(calls, 4);
    }

    #[test]
    fn gives_up_after_budget() {
        let mut calls = 0;
        let got: Option<()> = try_up_to(5, |_| {
            calls += 1;
            None
        });
        assert_eq!(got, None);
        assert_eq!(calls, 5);
    }

    #[test]
    fn zero_budget_never_calls() {
        let got = try_up_to(0, |_| -> Option<u8> { panic!("must not be called") });
        assert!(got.is_none());
    }
}
