//! Protocol error definitions.

use odra::prelude::*;

/// Result type for pure pricing and accounting helpers
pub type ArthResult<T> = Result<T, ArthError>;

/// ARTH protocol errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArthError {
    // Collateral ratio errors (1xx)
    InvalidRatio = 100,
    RefreshCooldownActive = 101,

    // Capacity errors (2xx)
    CeilingExceeded = 200,
    InsufficientCollateral = 201,
    RecollateralizeNotNeeded = 202,

    // Slippage errors (3xx)
    ArthSlippage = 300,
    ArthxSlippage = 301,
    CollateralSlippage = 302,

    // Pause errors (4xx)
    Paused = 400,

    // Access control errors (5xx)
    Forbidden = 500,

    // Redemption queue errors (6xx)
    NoActiveRedemption = 600,
    RedemptionDelayActive = 601,

    // AMO errors (7xx)
    RepayExceedsBorrowed = 700,

    // Ledger errors (8xx)
    InsufficientBalance = 800,
    InsufficientAllowance = 801,
    InsufficientFeeBalance = 802,
    TransferFailed = 803,

    // Configuration errors (9xx)
    InvalidConfig = 900,
    FeeOutOfRange = 901,
    PoolAlreadyRegistered = 902,
    PoolNotRegistered = 903,
    ZeroAmount = 904,
    InvalidPrice = 905,
}

impl ArthError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Collateral ratio
            ArthError::InvalidRatio => "Collateral ratio outside the admissible band",
            ArthError::RefreshCooldownActive => "Collateral ratio refresh still in cooldown",

            // Capacity
            ArthError::CeilingExceeded => "Pool ceiling reached",
            ArthError::InsufficientCollateral => "Insufficient collateral",
            ArthError::RecollateralizeNotNeeded => "No recollateralization needed",

            // Slippage
            ArthError::ArthSlippage => "ARTH Slippage limit reached",
            ArthError::ArthxSlippage => "ARTHX Slippage limit reached",
            ArthError::CollateralSlippage => "Collateral Slippage limit reached",

            // Pause
            ArthError::Paused => "Operation paused",

            // Access control
            ArthError::Forbidden => "Forbidden: caller lacks the required role",

            // Redemption queue
            ArthError::NoActiveRedemption => "No active redemption",
            ArthError::RedemptionDelayActive => "Redemption delay has not elapsed",

            // AMO
            ArthError::RepayExceedsBorrowed => "Repay amount exceeds borrowed amount",

            // Ledger
            ArthError::InsufficientBalance => "Insufficient token balance",
            ArthError::InsufficientAllowance => "Insufficient token allowance",
            ArthError::InsufficientFeeBalance => "Insufficient MAHA balance for stability fee",
            ArthError::TransferFailed => "Collateral ledger rejected the transfer",

            // Config
            ArthError::InvalidConfig => "Invalid configuration parameter",
            ArthError::FeeOutOfRange => "Fee must be below 100%",
            ArthError::PoolAlreadyRegistered => "Pool already registered",
            ArthError::PoolNotRegistered => "Pool not registered",
            ArthError::ZeroAmount => "Amount must be greater than zero",
            ArthError::InvalidPrice => "Oracle price is zero",
        }
    }
}

impl core::fmt::Display for ArthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<ArthError> for OdraError {
    fn from(error: ArthError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
