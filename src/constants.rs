/// Column layout of the headerless contact table.
/// Cells are positional; these names only label them in logs and errors.
pub const INPUT_COLUMNS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Address 1",
    "Address 2",
    "Address 3",
    "overflow",
];

pub const NAME_COLUMN: usize = 0;
pub const EMAIL_COLUMN: usize = 1;
pub const PHONE_COLUMN: usize = 2;
pub const FIRST_ADDRESS_COLUMN: usize = 3;
pub const ADDRESS_LINE_COUNT: usize = 4;

/// Header row written to the output table, in order.
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "first_name",
    "middle_name",
    "last_name",
    "email",
    "email_valid",
    "phone",
    "phone_valid",
    "address_1",
    "address_2",
    "city",
    "state",
    "zipcode",
];

/// File extensions handled by the spreadsheet reader
pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// File extensions handled by the delimited-text reader
pub const CSV_EXTENSIONS: [&str; 2] = ["csv", "txt"];
