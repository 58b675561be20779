pub mod confirmation_modal;
pub mod stat_card;
