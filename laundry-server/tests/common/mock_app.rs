use std::sync::Arc;

use axum::Router;
use laundry_api::classify;
use laundry_api::models::Board;
use laundry_server::app::create_app;
use laundry_server::configs::Settings;
use serde_json::json;
use time::macros::datetime;
use tokio::sync::watch;

pub const TEST_SETTINGS: &str = r##"
[server]
host = "127.0.0.1"
port = 0

[logger]
level = "debug"

[upstream]
url = "http://127.0.0.1:9/api/currentRoomData"
school_desc_key = "405"
location = "1362511"
user_contact = "9789088494"

[upstream.headers]
accept = "application/json, text/plain, */*"
referer = "https://www.laundryview.com/home/405/1362511"
user_agent = "laundry-test"

[poll]
interval_ms = 50

[dashboard]
title = "Test Hall Laundry"
subtitle = "Real-time Machine Status"
accent = "#A51C30"
backdrop = "#F8F9FA"
utc_offset_hours = 0
"##;

pub struct MockApp {
    pub sender: watch::Sender<Board>,
    pub router: Router,
}

impl MockApp {
    pub fn new() -> Self {
        let settings = Arc::new(Settings::from_toml(TEST_SETTINGS).unwrap());
        let (sender, receiver) = watch::channel(Board::pending());
        let router = create_app(&settings, receiver);

        Self {
            sender,
            router,
        }
    }

    pub fn with_board(self, board: Board) -> Self {
        self.sender.send_replace(board);
        self
    }
}

pub fn room_objects() -> serde_json::Value {
    json!([
        {"type": "D", "appliance_desc": "wall"},
        {"type": "washerB", "status_toggle": 2, "time_remaining": 12.7, "percentage": 0.6, "appliance_desc": "01"},
        {"type": "cardReader", "appliance_desc": "reader"},
        {"type": "dryerC", "status_toggle": 0, "appliance_desc": "02"},
        {"type": "washerD", "status_toggle": 2, "time_remaining": 0, "percentage": 1.0, "appliance_desc": "03"}
    ])
}

pub fn room_board() -> Board {
    let objects = room_objects().as_array().cloned().unwrap();

    Board::from_classification(classify(&objects), datetime!(2024-03-01 13:30:00 UTC))
}
