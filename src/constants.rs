// DOM wiring for the web front-end.

// Listeners on the window
pub const EVENT_RESIZE: &str = "resize";

// Listeners on the canvas
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_TOUCH_MOVE: &str = "touchmove";
pub const EVENT_POINTER_LEAVE: &str = "mouseleave";

// Every listener the backdrop installs; teardown must remove all of them.
pub const WIRED_EVENTS: [&str; 4] = [
    EVENT_RESIZE,
    EVENT_POINTER_MOVE,
    EVENT_TOUCH_MOVE,
    EVENT_POINTER_LEAVE,
];

// Console logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
