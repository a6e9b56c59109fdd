// Fixed values shared across the client - these are the single source of truth.

// Remote service
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

// localStorage keys
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

// Payload constants sent with every score / enhance request
pub const ATS_KEYWORDS: [&str; 4] = ["python", "fastapi", "sql", "react"];
pub const TARGET_ROLE: &str = "Software Developer";

// Score colour bands (inclusive lower bounds)
pub const SCORE_GOOD_THRESHOLD: u8 = 75;
pub const SCORE_WARNING_THRESHOLD: u8 = 50;
pub const SCORE_GOOD_COLOR: &str = "#16a34a";
pub const SCORE_WARNING_COLOR: &str = "#ca8a04";
pub const SCORE_POOR_COLOR: &str = "#dc2626";

// Accepted upload extensions (lower-case, without dot)
pub const SUPPORTED_UPLOAD_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

// User-facing messages
pub const MSG_NO_FILE_SELECTED: &str = "Please select a resume file";
pub const MSG_UNSUPPORTED_FILE: &str = "Please select a PDF or DOCX file";
pub const MSG_NO_TEXT_EXTRACTED: &str = "No text could be extracted from this file";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_SCORE_FAILED: &str = "ATS analysis failed";
pub const MSG_ENHANCE_FAILED: &str = "Enhancement failed";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_SIGNUP_FAILED: &str = "Signup failed";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";

// Toast lifetime in milliseconds
pub const TOAST_TIMEOUT_MS: u32 = 4000;
