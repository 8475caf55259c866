pub mod payment;
pub mod ticket;

pub use payment::{Payment, PaymentCreate};
pub use ticket::{Ticket, TicketCreate};
