//! Renders a small table to stdout and clicks a couple of cells.
//!
//! Diagnostics go to `flextable-demo.log`.

use std::fs::File;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::{queue, terminal};
use flextable::{
    dispatch_click, layout, render_to_buffer, Buffer, CellAlign, Color, ColumnSpec, Decoration,
    Edges, Rect, RowSpec, Table, TableDefaults,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    let log_file = File::create("flextable-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(io::Error::other)?;

    let (width, _) = terminal::size().unwrap_or((80, 24));
    let archived = Arc::new(AtomicBool::new(false));

    let users = [
        ("Ada Lovelace", "ada@example.com", "admin"),
        ("Grace Hopper", "grace@example.com", "editor"),
        ("Alan Turing", "alan@example.com", "viewer"),
    ];

    let mut rows: Vec<RowSpec<String>> = users
        .iter()
        .enumerate()
        .map(|(i, (name, email, role))| {
            RowSpec::new([name.to_string(), email.to_string(), role.to_string()])
                .selected(i == 1)
                .on_select(move |value| log::info!("row {i} selection -> {value}"))
                .on_tap(move || log::info!("row {i} tapped"))
        })
        .collect();

    // Two cells only: logged as a mismatch, third column left empty.
    let flag = archived.clone();
    rows.push(
        RowSpec::new(["Edsger Dijkstra".to_string(), "edsger@example.com".to_string()])
            .decoration(Decoration::fill(Color::rgb(60, 40, 40)).border(Color::rgb(200, 80, 80)))
            .on_select(move |value| flag.store(value, Ordering::Relaxed)),
    );

    let grid = Table::new(
        vec![
            ColumnSpec::new("Name".to_string()).flex(2),
            ColumnSpec::new("Email".to_string()).flex(3),
            ColumnSpec::new("Role".to_string()).align(CellAlign::CENTER),
        ],
        rows,
    )
    .defaults(TableDefaults {
        checkbox_width: 5,
        ..TableDefaults::new()
    })
    .header_decoration(Decoration::fill(Color::oklch(0.35, 0.08, 250.0)).bold())
    .cell_padding(Edges::horizontal(1))
    .show_checkboxes(true)
    .on_select_all(|value| log::info!("select all -> {value}"))
    .build();

    let area = Rect::new(0, 0, width.min(100), 12);
    let rects = layout(&grid, area);
    let mut buf = Buffer::new(area.width, rects.bounds.height);
    render_to_buffer(&grid, &rects, &mut buf);
    print_buffer(&buf)?;

    for span in rects.rows.iter().skip(1) {
        let checkbox_x = rects.columns[0].start + 2;
        if let Some(interaction) = dispatch_click(&grid, &rects, checkbox_x, span.start) {
            println!("{interaction:?}");
        }
    }
    println!("archived flag: {}", archived.load(Ordering::Relaxed));

    for diagnostic in &grid.diagnostics {
        println!("warning: {diagnostic}");
    }

    Ok(())
}

fn print_buffer(buf: &Buffer) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else {
                continue;
            };
            if cell.wide_continuation {
                continue;
            }
            queue!(
                out,
                SetForegroundColor(TermColor::Rgb {
                    r: cell.fg.r,
                    g: cell.fg.g,
                    b: cell.fg.b
                }),
                SetBackgroundColor(TermColor::Rgb {
                    r: cell.bg.r,
                    g: cell.bg.g,
                    b: cell.bg.b
                }),
                SetAttribute(if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                }),
                Print(cell.symbol)
            )?;
        }
        queue!(out, ResetColor, SetAttribute(Attribute::Reset), Print("\n"))?;
    }
    out.flush()
}
