/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    MainMenu,
    RequestList,
    LivingHarmony,
    Safety,
    Map,
    RoomDetail,
}

impl Screen {
    /// Title shown in headers and log lines
    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "Main Menu",
            Screen::RequestList => "My Rental Requests",
            Screen::LivingHarmony => "Living in Harmony",
            Screen::Safety => "Safety",
            Screen::Map => "Room Map",
            Screen::RoomDetail => "Room Details",
        }
    }
}
