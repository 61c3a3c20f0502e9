mod clip_path;
mod cmdline;
mod document;
mod error_handling;
mod polygon;
mod quality;
