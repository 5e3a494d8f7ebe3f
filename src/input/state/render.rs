use crate::draw::render::{fill_background, render_grid, render_text_lines};

use super::{DrawingState, InputState};

impl InputState {
    /// Composites what the user should see into `ctx`.
    ///
    /// Layers, bottom to top: canvas background, the raster surface, the grid
    /// overlay (when enabled), and the text being edited with its caret.
    /// Nothing drawn here reaches the surface or the history.
    ///
    /// The context is expected to be in surface coordinates; hosts apply the
    /// viewport transform before calling.
    pub fn render_view(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        fill_background(ctx, self.board.canvas_background)?;

        let Some(image) = self.surface.image() else {
            return Ok(());
        };
        let (width, height) = self.surface.size();

        ctx.save()?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(image, 0.0, 0.0)?;
        let painted = ctx.paint();
        ctx.restore()?;
        painted?;

        if self.board.show_grid {
            render_grid(
                ctx,
                width,
                height,
                self.board.grid_size,
                self.board.theme.grid_color(),
            )?;
        }

        if let (DrawingState::EditingText { position, .. }, Some(preview)) =
            (&self.state, self.text_preview())
        {
            render_text_lines(
                ctx,
                *position,
                &preview,
                self.draw_settings.settings.paint_color(),
                &self.font,
            )?;
        }

        Ok(())
    }
}
