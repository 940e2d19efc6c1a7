#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    pet_lense_lib::run()
}
