pub mod annotate;
