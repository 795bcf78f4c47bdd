// Shell side: turns catalog and detail views into text, JSON and table exports.

pub mod export;
pub mod render;
