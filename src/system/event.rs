//! System Events
//!
//! Channels and signals between the control loop and the handler tasks.
//!
//! - Events resuming the control loop travel on [`EVENT_CHANNEL`]
//! - Requests from the control loop to the handlers are signals: a request
//!   that is already pending is not queued twice

use breathalyzer_core::Event;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Multi-producer, single-consumer event channel into the control loop
///
/// At most one conversion and one debounce cycle are outstanding, so a small
/// capacity is plenty.
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, 4> = Channel::new();

/// Conversion start requests for the sample task, carrying the sequence
/// number the completion must echo
static CONVERSION_REQUEST: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Button watcher arm requests
static BUTTON_ARM: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Idle blink timer start requests
static BLINK_START: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Sends an event to the control loop
pub async fn send(event: Event) {
    EVENT_CHANNEL.sender().send(event).await;
}

/// Receives the next event, the control loop's only suspension point
pub async fn wait() -> Event {
    EVENT_CHANNEL.receiver().receive().await
}

/// Drops every event not yet received
pub fn discard() {
    EVENT_CHANNEL.clear();
}

/// Asks the sample task for conversion `sequence`
pub fn request_conversion(sequence: u32) {
    CONVERSION_REQUEST.signal(sequence);
}

/// Waits for the next conversion request, returns its sequence number
pub async fn wait_conversion_request() -> u32 {
    CONVERSION_REQUEST.wait().await
}

/// Enables the start button watcher
pub fn arm_button() {
    BUTTON_ARM.signal(());
}

/// Waits until the button watcher is armed
pub async fn wait_button_armed() {
    BUTTON_ARM.wait().await
}

/// Starts the idle blink timer
pub fn start_blinking() {
    BLINK_START.signal(());
}

/// Waits for the idle blink timer to be started
pub async fn wait_blink_start() {
    BLINK_START.wait().await
}
