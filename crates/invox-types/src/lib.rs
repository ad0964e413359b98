pub mod currency;
pub mod invoice;
pub mod timestamp;
mod util;

pub use currency::CurrencyTable;
pub use invoice::{Invoice, InvoiceDraft, PaymentStatus};
pub use timestamp::Timestamp;
pub use util::*;
