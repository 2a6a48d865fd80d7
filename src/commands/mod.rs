pub mod longest_orfs;
pub mod run;
