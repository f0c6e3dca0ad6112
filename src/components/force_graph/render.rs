use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{FONT_SIZE, ForceGraphState, LINE_HEIGHT, NodeInfo};
use crate::pathway::NodeShape;

const BACKGROUND: &str = "#1a1a2e";
const LABEL_COLOR: &str = "#ffffff";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 9.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let (out, inset) = (
			n1.data.user_data.boundary(ux, uy),
			n2.data.user_data.boundary(ux, uy),
		);
		if out + inset + arrow_size >= dist {
			return;
		}

		let is_highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		// t=0: every edge at base alpha; t=1: highlighted edges up, the rest down
		let (alpha, width) = if is_highlighted {
			(0.7 + 0.3 * t, line_width * (1.0 + 0.4 * t))
		} else {
			(0.7 - 0.55 * t, line_width * (1.0 - 0.3 * t))
		};

		let color = state.edge_color(n1.index(), n2.index());
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		ctx.begin_path();
		ctx.move_to(x1 + ux * out, y1 + uy * out);
		ctx.line_to(
			x2 - ux * (inset + arrow_size),
			y2 - uy * (inset + arrow_size),
		);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(color);
		let (tip_x, tip_y) = (x2 - ux * inset, y2 - uy * inset);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	ctx.set_font(&format!("{}px sans-serif", FONT_SIZE));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	// Dimmed nodes first so highlighted ones end up on top
	state.graph.visit_nodes(|node| {
		if has_highlight && state.is_highlighted(node.index()) {
			return;
		}
		let alpha = if has_highlight { 1.0 - 0.7 * t } else { 1.0 };
		ctx.set_global_alpha(alpha);
		draw_node(
			ctx,
			&node.data.user_data,
			node.x() as f64,
			node.y() as f64,
			1.5 / k,
		);
	});
	ctx.set_global_alpha(1.0);

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let border = if state.is_hovered(idx) {
			(1.5 + 1.5 * t) / k
		} else {
			1.5 / k
		};
		draw_node(ctx, &node.data.user_data, node.x() as f64, node.y() as f64, border);
	});
}

fn draw_node(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, border: f64) {
	ctx.set_line_width(border);
	ctx.set_stroke_style_str(info.border);
	ctx.set_fill_style_str(info.background);

	match info.shape {
		Some(NodeShape::Star) => {
			star_path(ctx, x, y, info.size);
			ctx.fill();
			ctx.stroke();
			// Label sits below the star
			let top = y + info.size + LINE_HEIGHT * 0.75;
			draw_lines(ctx, &info.lines, x, top);
		}
		_ => {
			let (hw, hh) = info.half_extent();
			ctx.begin_path();
			ctx.rect(x - hw, y - hh, hw * 2.0, hh * 2.0);
			ctx.fill();
			ctx.stroke();
			let top = y - (info.lines.len().saturating_sub(1)) as f64 * LINE_HEIGHT / 2.0;
			draw_lines(ctx, &info.lines, x, top);
		}
	}
}

fn draw_lines(ctx: &CanvasRenderingContext2d, lines: &[String], x: f64, top: f64) {
	ctx.set_fill_style_str(LABEL_COLOR);
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x, top + i as f64 * LINE_HEIGHT);
	}
}

fn star_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
	let inner = radius * 0.45;
	ctx.begin_path();
	for i in 0..10 {
		let r = if i % 2 == 0 { radius } else { inner };
		let angle = -PI / 2.0 + i as f64 * PI / 5.0;
		let (px, py) = (x + r * angle.cos(), y + r * angle.sin());
		if i == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
	ctx.close_path();
}
