mod lifecycle_scanner;

pub use lifecycle_scanner::{
    LifecycleScanner, DELIVERY_TIMEOUT_MINUTES, PAYMENT_TIMEOUT_MINUTES,
};
