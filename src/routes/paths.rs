//! Route paths shared by links, redirects and the route table. The casing of
//! `/signUp` and `/Expense` is part of the public URL scheme.

pub(crate) const ROOT: &str = "/";
pub(crate) const LOGIN: &str = "/login";
pub(crate) const SIGN_UP: &str = "/signUp";
pub(crate) const DASHBOARD: &str = "/dashboard";
pub(crate) const INCOME: &str = "/income";
pub(crate) const EXPENSE: &str = "/Expense";

#[cfg(test)]
mod tests {
    use super::{DASHBOARD, EXPENSE, INCOME, LOGIN, ROOT, SIGN_UP};

    #[test]
    fn public_paths_keep_their_casing() {
        assert_eq!(
            [ROOT, LOGIN, SIGN_UP, DASHBOARD, INCOME, EXPENSE],
            ["/", "/login", "/signUp", "/dashboard", "/income", "/Expense"]
        );
    }
}
