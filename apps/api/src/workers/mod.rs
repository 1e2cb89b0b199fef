pub mod output_sweeper;
