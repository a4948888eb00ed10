pub mod profile_card_mapper;
