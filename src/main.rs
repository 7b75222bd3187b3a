mod engine;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Bill Splitter",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::BillSplitApp::new()))),
    )
}
