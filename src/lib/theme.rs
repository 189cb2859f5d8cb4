//! Shared Tailwind class constants for form controls so the login and sign-up
//! pages stay visually consistent.

pub struct Theme;

impl Theme {
    /// Field label.
    pub const LABEL: &'static str = "block text-sm font-semibold text-gray-700";

    /// Input base; combine with [`Theme::INPUT_OK`] or [`Theme::INPUT_ERROR`].
    pub const INPUT: &'static str = "block w-full pl-10 pr-12 py-3 border-2 rounded-xl shadow-sm placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500 transition-all duration-200";

    pub const INPUT_OK: &'static str = "border-gray-300 hover:border-gray-400";

    pub const INPUT_ERROR: &'static str = "border-red-300 focus:border-red-500 focus:ring-red-500";

    /// Inline message under an invalid field.
    pub const FIELD_ERROR: &'static str = "text-red-500 text-sm font-medium";

    /// Leading icon inside an input.
    pub const INPUT_ICON: &'static str = "absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none material-symbols-outlined text-gray-400";

    pub const LINK: &'static str = "font-semibold text-emerald-600 hover:text-emerald-500 transition-colors duration-200";
}
