/*
[INPUT]:  None
[OUTPUT]: User-facing Indonesian strings shared by every front end
[POS]:    Presentation constants
[UPDATE]: When form copy changes
*/

pub const FORM_TITLE: &str = "Tambah Tugas Baru";
pub const SUBMIT_LABEL: &str = "Tambah Tugas";
pub const SUBMIT_LOADING_LABEL: &str = "Menambahkan...";

/// Shown when name or deadline date is missing
pub const REQUIRED_FIELDS: &str = "Nama tugas dan tanggal deadline wajib diisi.";
/// Shown when the server rejects a request without a usable message
pub const SUBMIT_FAILED: &str = "Gagal menambah tugas";

pub const INVALID_DATE: &str = "Format tanggal deadline harus YYYY-MM-DD.";
pub const INVALID_TIME: &str = "Format waktu deadline harus HH:MM.";
pub const INVALID_ATTACHMENT_LINK: &str = "Link tugas harus berupa URL yang valid.";
pub const INVALID_SUBMIT_LINK: &str = "Link pengumpulan harus berupa URL yang valid.";

pub const TASK_ADDED: &str = "Tugas berhasil ditambahkan.";
