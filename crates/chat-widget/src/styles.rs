//! Centralized style constants for the widget components.

pub const PANEL: &str = "fixed bottom-20 right-4 w-80 max-h-[70vh] flex flex-col rounded-lg shadow-xl bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 overflow-hidden";
pub const PANEL_HEADER: &str = "px-4 py-3 bg-emerald-600 text-white flex justify-between items-center";
pub const CLOSE_BUTTON: &str = "text-white opacity-80 hover:opacity-100 text-lg leading-none";
pub const TOGGLE_BUTTON: &str = "fixed bottom-4 right-4 w-12 h-12 rounded-full bg-emerald-600 hover:bg-emerald-700 text-white text-xl shadow-lg transition-colors";

pub const LOG: &str = "flex-1 overflow-y-auto p-3 flex flex-col gap-2";
pub const USER_BUBBLE: &str = "self-end max-w-[85%] px-3 py-2 rounded-lg bg-emerald-100 dark:bg-emerald-900 text-gray-900 dark:text-gray-100 whitespace-pre-wrap break-words";
pub const BOT_BUBBLE: &str = "self-start max-w-[85%] px-3 py-2 rounded-lg bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-gray-100 whitespace-pre-wrap break-words";

pub const CARD_GRID: &str = "self-start w-full grid grid-cols-1 gap-2";
pub const CARD: &str = "rounded-md border border-gray-200 dark:border-gray-600 bg-white dark:bg-gray-800 p-3 flex flex-col gap-1";
pub const CARD_BADGE: &str = "self-start text-xs px-2 py-0.5 rounded-full bg-emerald-100 dark:bg-emerald-900 text-emerald-800 dark:text-emerald-200";
pub const CARD_TITLE: &str = "font-semibold text-sm text-gray-900 dark:text-gray-100";
pub const CARD_SUBTITLE: &str = "text-xs text-gray-600 dark:text-gray-400";
pub const CARD_PRICE: &str = "text-sm font-medium text-emerald-700 dark:text-emerald-300";

pub const CHIP_ROW: &str = "px-3 py-2 flex flex-wrap gap-2 border-t border-gray-200 dark:border-gray-700";
pub const CHIP: &str = "text-xs px-3 py-1 rounded-full border border-emerald-600 text-emerald-700 dark:text-emerald-300 hover:bg-emerald-50 dark:hover:bg-emerald-900 transition-colors disabled:opacity-50";

pub const INPUT_ROW: &str = "p-3 border-t border-gray-200 dark:border-gray-700 flex gap-2";
pub const INPUT: &str = "flex-1 px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-emerald-500";
pub const SEND_BUTTON: &str = "px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-md text-sm transition-colors disabled:bg-gray-300 dark:disabled:bg-gray-600 disabled:cursor-not-allowed";

pub const TYPING_WRAP: &str = "self-start px-3 py-2 flex gap-1";
pub const TYPING_DOT: &str = "w-2 h-2 rounded-full bg-gray-500 dark:bg-gray-400 animate-pulse-dot";

/// Joins style constants with the occasional one-off class.
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
