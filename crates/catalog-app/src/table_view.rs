use anyhow::anyhow;
use catalog_table::TableModel;
use eframe::NativeOptions;
use egui::{Align, CentralPanel, Context, Layout, ViewportBuilder};
use egui_extras::{Column, TableBuilder};

/// Opens the table window and blocks until the user closes it.
pub fn show(title: &str, model: TableModel) -> anyhow::Result<()> {
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([500.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Box::new(TableView { model })),
    )
    .map_err(|err| anyhow!(err.to_string()))
}

struct TableView {
    model: TableModel,
}

impl eframe::App for TableView {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::initial(130.0).resizable(true))
                .column(Column::initial(160.0).resizable(true))
                .column(Column::initial(120.0).resizable(true))
                .column(Column::remainder())
                .header(22.0, |mut header| {
                    for column in 0..self.model.column_count() {
                        header.col(|ui| {
                            ui.strong(self.model.column_name(column).unwrap_or(""));
                        });
                    }
                })
                .body(|mut body| {
                    for row_index in 0..self.model.row_count() {
                        body.row(24.0, |mut row| {
                            for column in 0..self.model.column_count() {
                                row.col(|ui| {
                                    ui.label(self.model.value_at(row_index, column).unwrap_or(""));
                                });
                            }
                        });
                    }
                });
        });
    }
}
