/// Process exit codes. The numeric values are part of the CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    NumberOfArgs = 1,
    NamespacesCatalogMissing = 2,
    NamespaceIndexOutOfRange = 3,
    ChangesFileMissing = 4,
}

/// Exit status for faults raised by the installer or the catalog loader.
/// Deliberately outside the `ExitCode` table.
pub const FAULT_EXIT_CODE: u8 = 101;

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
