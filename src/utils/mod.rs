pub mod epoch_millis_serde;
