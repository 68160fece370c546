use std::time::Duration;

use font8x8::UnicodeFonts;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use photoclip_application::{
    DocumentEditor, GalleryService, GalleryTile, OpenGalleryCommand, RefreshAlbumCommand,
    ThumbnailFetcher, ThumbnailImage,
};

const WINDOW_WIDTH: usize = 1000;
const WINDOW_HEIGHT: usize = 700;
const HEADER_HEIGHT: usize = 44;
const FOOTER_HEIGHT: usize = 28;
const GRID_COLUMNS: usize = 2;
const CELL_PADDING: usize = 8;
const CELL_HEIGHT: usize = 220;
// Distance from the bottom of the loaded content at which the next
// batch starts loading.
const SENTINEL_MARGIN: usize = 160;
const KEY_SCROLL_STEP: usize = 48;
const WHEEL_SCROLL_STEP: usize = 32;

const COLOR_BACKGROUND: u32 = 0x1A1A1E;
const COLOR_HEADER: u32 = 0x26262C;
const COLOR_FOOTER: u32 = 0x212126;
const COLOR_CELL: u32 = 0x101014;
const COLOR_CELL_BORDER: u32 = 0x3A3A44;
const COLOR_PLACEHOLDER: u32 = 0x2A2A30;
const COLOR_TEXT: u32 = 0xE6E2D8;
const COLOR_TEXT_DIM: u32 = 0x8A8A94;

struct LoadedTile {
    tile: GalleryTile,
    canvas: Option<ThumbnailImage>,
}

/// Opens the gallery window over a fresh session and runs the event
/// loop until the user closes it. Clicking a thumbnail inserts its
/// markdown link into the editor and keeps the window open so more
/// images can be inserted.
pub fn launch_window(
    service: &mut GalleryService,
    thumbnails: &dyn ThumbnailFetcher,
    editor: &mut dyn DocumentEditor,
) -> Result<(), String> {
    let mut session = service
        .open_gallery(OpenGalleryCommand)
        .map_err(|error| format!("failed to open gallery: {error}"))?;

    let width = WINDOW_WIDTH;
    let height = WINDOW_HEIGHT;
    let mut window = Window::new(
        &format!("photoclip | {}", session.album().album_name),
        width,
        height,
        WindowOptions::default(),
    )
    .map_err(|error| format!("failed to start gallery window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let mut buffer = vec![COLOR_BACKGROUND; width * height];
    let mut tiles: Vec<LoadedTile> = Vec::new();
    let mut scroll = 0_usize;
    let mut status = format!("click a photo to insert at offset {}", editor.cursor());
    let mut was_mouse_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            match service.refresh_album(RefreshAlbumCommand) {
                Ok(_) => {
                    session = service
                        .open_gallery(OpenGalleryCommand)
                        .map_err(|error| format!("failed to reopen gallery: {error}"))?;
                    tiles.clear();
                    scroll = 0;
                    status = "album refreshed".to_string();
                }
                Err(error) => {
                    log::warn!("refresh failed: {error}");
                    status = format!("refresh failed: {error}");
                }
            }
        }

        if window.is_key_down(Key::Down) {
            scroll = scroll.saturating_add(KEY_SCROLL_STEP);
        }
        if window.is_key_down(Key::Up) {
            scroll = scroll.saturating_sub(KEY_SCROLL_STEP);
        }
        if window.is_key_pressed(Key::PageDown, KeyRepeat::Yes) {
            scroll = scroll.saturating_add(viewport_height(height));
        }
        if window.is_key_pressed(Key::PageUp, KeyRepeat::Yes) {
            scroll = scroll.saturating_sub(viewport_height(height));
        }
        if let Some((_, wheel_y)) = window.get_scroll_wheel() {
            if wheel_y < 0.0 {
                scroll = scroll.saturating_add(WHEEL_SCROLL_STEP);
            } else if wheel_y > 0.0 {
                scroll = scroll.saturating_sub(WHEEL_SCROLL_STEP);
            }
        }
        scroll = scroll.min(max_scroll(tiles.len(), height));

        // The sentinel check runs every frame; once the session is
        // exhausted it degrades to a no-op.
        if sentinel_visible(scroll, tiles.len(), height) && !session.is_exhausted() {
            for tile in session.next_batch() {
                let canvas = match thumbnails.fetch_thumbnail(&tile.thumbnail_url) {
                    Ok(canvas) => Some(canvas),
                    Err(error) => {
                        log::warn!("thumbnail fetch failed for {}: {error}", tile.asset_id);
                        None
                    }
                };
                tiles.push(LoadedTile { tile, canvas });
            }
            status = format!("loaded {}/{}", session.loaded(), session.total());
        }

        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if mouse_down && !was_mouse_down {
            if let Some((mouse_x, mouse_y)) = window.get_mouse_pos(MouseMode::Clamp) {
                let hit = tile_at_position(
                    mouse_x.max(0.0) as usize,
                    mouse_y.max(0.0) as usize,
                    scroll,
                    width,
                    height,
                    tiles.len(),
                );
                if let Some(index) = hit {
                    let loaded = &tiles[index];
                    let at = editor.cursor();
                    match service.insert_tile(editor, &loaded.tile) {
                        Ok(()) => status = insertion_status(&loaded.tile, at),
                        Err(error) => {
                            log::warn!("insert failed: {error}");
                            status = format!("insert failed: {error}");
                        }
                    }
                }
            }
        }
        was_mouse_down = mouse_down;

        draw_frame(
            &mut buffer,
            width,
            height,
            &tiles,
            scroll,
            session.album().album_name.as_str(),
            session.loaded(),
            session.total(),
            &status,
        );
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to update gallery window: {error}"))?;
    }

    Ok(())
}

fn tile_label(tile: &GalleryTile) -> &str {
    if tile.original_file_name.is_empty() {
        &tile.asset_id
    } else {
        &tile.original_file_name
    }
}

fn insertion_status(tile: &GalleryTile, at: usize) -> String {
    format!("inserted {} at offset {at}", tile_label(tile))
}

// Layout arithmetic. Positions are in "document" coordinates measured
// from the top of the grid; a cell shows on screen at
// HEADER_HEIGHT + doc_y - scroll.

fn cell_width(window_width: usize) -> usize {
    (window_width - CELL_PADDING * (GRID_COLUMNS + 1)) / GRID_COLUMNS
}

fn cell_origin(index: usize, window_width: usize) -> (usize, usize) {
    let row = index / GRID_COLUMNS;
    let col = index % GRID_COLUMNS;
    let x = CELL_PADDING + col * (cell_width(window_width) + CELL_PADDING);
    let doc_y = CELL_PADDING + row * (CELL_HEIGHT + CELL_PADDING);
    (x, doc_y)
}

fn content_height(tile_count: usize) -> usize {
    let rows = (tile_count + GRID_COLUMNS - 1) / GRID_COLUMNS;
    CELL_PADDING + rows * (CELL_HEIGHT + CELL_PADDING)
}

fn viewport_height(window_height: usize) -> usize {
    window_height - HEADER_HEIGHT - FOOTER_HEIGHT
}

fn max_scroll(tile_count: usize, window_height: usize) -> usize {
    content_height(tile_count).saturating_sub(viewport_height(window_height))
}

fn sentinel_visible(scroll: usize, tile_count: usize, window_height: usize) -> bool {
    scroll + viewport_height(window_height) + SENTINEL_MARGIN >= content_height(tile_count)
}

fn tile_at_position(
    mouse_x: usize,
    mouse_y: usize,
    scroll: usize,
    window_width: usize,
    window_height: usize,
    tile_count: usize,
) -> Option<usize> {
    if mouse_y < HEADER_HEIGHT || mouse_y >= window_height - FOOTER_HEIGHT {
        return None;
    }
    let doc_y = mouse_y - HEADER_HEIGHT + scroll;
    if doc_y < CELL_PADDING || mouse_x < CELL_PADDING {
        return None;
    }

    let stride_y = CELL_HEIGHT + CELL_PADDING;
    let row = (doc_y - CELL_PADDING) / stride_y;
    if (doc_y - CELL_PADDING) % stride_y >= CELL_HEIGHT {
        return None;
    }

    let stride_x = cell_width(window_width) + CELL_PADDING;
    let col = (mouse_x - CELL_PADDING) / stride_x;
    if col >= GRID_COLUMNS || (mouse_x - CELL_PADDING) % stride_x >= cell_width(window_width) {
        return None;
    }

    let index = row * GRID_COLUMNS + col;
    if index < tile_count {
        Some(index)
    } else {
        None
    }
}

fn fit_within(src_width: usize, src_height: usize, max_width: usize, max_height: usize) -> (usize, usize) {
    if src_width == 0 || src_height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }
    let scale = (max_width as f32 / src_width as f32).min(max_height as f32 / src_height as f32);
    let width = ((src_width as f32 * scale).max(1.0)).round() as usize;
    let height = ((src_height as f32 * scale).max(1.0)).round() as usize;
    (width.min(max_width), height.min(max_height))
}

#[allow(clippy::too_many_arguments)]
fn draw_frame(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    tiles: &[LoadedTile],
    scroll: usize,
    album_name: &str,
    loaded: usize,
    total: usize,
    status: &str,
) {
    buffer.fill(COLOR_BACKGROUND);

    let clip_top = HEADER_HEIGHT;
    let clip_bottom = height - FOOTER_HEIGHT;
    for (index, loaded_tile) in tiles.iter().enumerate() {
        let (x, doc_y) = cell_origin(index, width);
        let screen_y = HEADER_HEIGHT as isize + doc_y as isize - scroll as isize;
        if screen_y + CELL_HEIGHT as isize <= clip_top as isize
            || screen_y >= clip_bottom as isize
        {
            continue;
        }
        draw_cell(
            buffer,
            width,
            x,
            screen_y,
            cell_width(width),
            loaded_tile,
            clip_top,
            clip_bottom,
        );
    }

    fill_rect(buffer, width, 0, 0, width, HEADER_HEIGHT, COLOR_HEADER);
    let title = if album_name.is_empty() {
        "PHOTOCLIP".to_string()
    } else {
        format!("PHOTOCLIP - {}", album_name.to_ascii_uppercase())
    };
    draw_text(buffer, width, 12, 10, &title, COLOR_TEXT);
    draw_text(
        buffer,
        width,
        12,
        26,
        &format!("LOADED {loaded}/{total}"),
        COLOR_TEXT_DIM,
    );

    fill_rect(
        buffer,
        width,
        0,
        height - FOOTER_HEIGHT,
        width,
        FOOTER_HEIGHT,
        COLOR_FOOTER,
    );
    draw_text(
        buffer,
        width,
        12,
        height - FOOTER_HEIGHT + 10,
        &status.to_ascii_uppercase(),
        COLOR_TEXT,
    );
    let help = "R REFRESH | ESC CLOSE";
    draw_text(
        buffer,
        width,
        width.saturating_sub(help.len() * 8 + 12),
        height - FOOTER_HEIGHT + 10,
        help,
        COLOR_TEXT_DIM,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_cell(
    buffer: &mut [u32],
    width: usize,
    x: usize,
    screen_y: isize,
    cell_w: usize,
    loaded_tile: &LoadedTile,
    clip_top: usize,
    clip_bottom: usize,
) {
    fill_rect_clipped(
        buffer, width, x, screen_y, cell_w, CELL_HEIGHT, COLOR_CELL, clip_top, clip_bottom,
    );

    match &loaded_tile.canvas {
        Some(canvas) => {
            let (draw_w, draw_h) = fit_within(
                canvas.width as usize,
                canvas.height as usize,
                cell_w.saturating_sub(2),
                CELL_HEIGHT.saturating_sub(2),
            );
            if draw_w > 0 && draw_h > 0 {
                let offset_x = x + 1 + (cell_w.saturating_sub(2) - draw_w) / 2;
                let offset_y = screen_y + 1 + ((CELL_HEIGHT.saturating_sub(2) - draw_h) / 2) as isize;
                blit_scaled(
                    buffer, width, canvas, offset_x, offset_y, draw_w, draw_h, clip_top,
                    clip_bottom,
                );
            }
        }
        None => {
            // Thumbnail failed to load; keep the slot clickable.
            fill_rect_clipped(
                buffer,
                width,
                x + cell_w / 2 - 12,
                screen_y + (CELL_HEIGHT / 2 - 12) as isize,
                24,
                24,
                COLOR_PLACEHOLDER,
                clip_top,
                clip_bottom,
            );
        }
    }

    draw_rect_clipped(
        buffer,
        width,
        x,
        screen_y,
        cell_w,
        CELL_HEIGHT,
        COLOR_CELL_BORDER,
        clip_top,
        clip_bottom,
    );
}

#[allow(clippy::too_many_arguments)]
fn blit_scaled(
    buffer: &mut [u32],
    width: usize,
    canvas: &ThumbnailImage,
    dest_x: usize,
    dest_y: isize,
    dest_w: usize,
    dest_h: usize,
    clip_top: usize,
    clip_bottom: usize,
) {
    let src_w = canvas.width as usize;
    let src_h = canvas.height as usize;
    for y in 0..dest_h {
        let screen_y = dest_y + y as isize;
        if screen_y < clip_top as isize || screen_y >= clip_bottom as isize {
            continue;
        }
        let src_y = y * src_h / dest_h;
        for x in 0..dest_w {
            let src_x = x * src_w / dest_w;
            let color = canvas.pixels[src_y * src_w + src_x];
            set_pixel(buffer, width, dest_x + x, screen_y as usize, color);
        }
    }
}

fn set_pixel(buffer: &mut [u32], width: usize, x: usize, y: usize, color: u32) {
    let height = buffer.len() / width;
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

fn fill_rect(
    buffer: &mut [u32],
    width: usize,
    left: usize,
    top: usize,
    w: usize,
    h: usize,
    color: u32,
) {
    for y in top..top.saturating_add(h) {
        for x in left..left.saturating_add(w) {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_rect_clipped(
    buffer: &mut [u32],
    width: usize,
    left: usize,
    top: isize,
    w: usize,
    h: usize,
    color: u32,
    clip_top: usize,
    clip_bottom: usize,
) {
    for y in 0..h {
        let screen_y = top + y as isize;
        if screen_y < clip_top as isize || screen_y >= clip_bottom as isize {
            continue;
        }
        for x in left..left.saturating_add(w) {
            set_pixel(buffer, width, x, screen_y as usize, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_rect_clipped(
    buffer: &mut [u32],
    width: usize,
    left: usize,
    top: isize,
    w: usize,
    h: usize,
    color: u32,
    clip_top: usize,
    clip_bottom: usize,
) {
    if w == 0 || h == 0 {
        return;
    }
    let in_range = |y: isize| y >= clip_top as isize && y < clip_bottom as isize;
    let bottom = top + h as isize - 1;
    for x in left..left + w {
        if in_range(top) {
            set_pixel(buffer, width, x, top as usize, color);
        }
        if in_range(bottom) {
            set_pixel(buffer, width, x, bottom as usize, color);
        }
    }
    for y in 0..h {
        let screen_y = top + y as isize;
        if in_range(screen_y) {
            set_pixel(buffer, width, left, screen_y as usize, color);
            set_pixel(buffer, width, left + w - 1, screen_y as usize, color);
        }
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        draw_char(buffer, width, cursor_x, y, ch, color);
        cursor_x = cursor_x.saturating_add(8);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: usize, y: usize, ch: char, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                set_pixel(buffer, width, x + col, y + row, color);
            }
        }
    }
}
