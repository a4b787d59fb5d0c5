use soroban_sdk::contracterror;

/// Custom error types for the option grant contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OptionGrantError {
    // Authorization errors (1100-1199)
    Unauthorized = 1100,

    // Validation errors (1200-1299)
    InvalidAmount = 1200,
    InvalidBeneficiary = 1201,
    InvalidSchedule = 1202,

    // Grant errors (1300-1399)
    InsufficientPool = 1300,
    GrantNotFound = 1301,
    GrantAlreadyExists = 1302,
    ScheduleAlreadySet = 1303,
    AlreadyExercised = 1304,
    InsufficientVested = 1305,

    // Token errors (1400-1499)
    InsufficientBalance = 1400,
    TokenNotConfigured = 1401,
    TransferFailed = 1402,

    // Protocol errors (1500-1599)
    NotInitialized = 1500,
    AlreadyInitialized = 1501,
    ProtocolPaused = 1502,
    ReentrancyDetected = 1503,
}
