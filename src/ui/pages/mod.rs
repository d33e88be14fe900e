pub mod tier_list;

pub use tier_list::TierListPage;
