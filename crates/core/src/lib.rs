pub mod banks;
pub mod barcode;
pub mod checksum;
pub mod linha;

pub use banks::{bank_name, is_known_bank_code, KNOWN_BANK_CODES};
pub use barcode::{is_valid_barcode, Barcode};
pub use checksum::mod10_check_digit;
pub use linha::{format_number, linha_digitavel_from_barcode, LinhaDigitavel};
