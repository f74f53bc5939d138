pub mod analysis_panel;
pub mod baseline_table;
pub mod donut;
pub mod nav_bar;
pub mod spark_line;
pub mod stat_card;
