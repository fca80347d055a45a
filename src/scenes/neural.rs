//! Scenes explaining how a small feed-forward network processes data, plus two short companions.

use crate::{
    animation::ease::Ease,
    demo::gradient::GradientDescent,
    foundation::{
        color::Color,
        core::{DOWN, LEFT, Point, RIGHT, UP},
        error::ExplainerResult,
    },
    layout::{arrange::DEFAULT_EDGE_BUFF, axes::Axes, network::NetworkLayout},
    scene::{
        dsl::{Animation, SceneBuilder},
        model::{Connection, Layer, Scene, Style, Target},
    },
};

/// Neurons per layer: input, two hidden layers, output.
pub const LAYER_SIZES: [usize; 4] = [4, 6, 6, 3];
pub const NEURON_RADIUS: f64 = 0.25;
const LAYER_NAMES: [&str; 4] = [
    "Input\nLayer",
    "Hidden\nLayer 1",
    "Hidden\nLayer 2",
    "Output\nLayer",
];
const OUTPUTS: [(&str, f64); 3] = [("Cat", 0.15), ("Dog", 0.75), ("Bird", 0.10)];
/// Seconds per gradient-descent update in [`gradient_descent`].
pub const DESCENT_STEP_SECS: f64 = 0.5;
/// Points sampled along the curve for each update of the rolling ball.
const DESCENT_PATH_SAMPLES: usize = 16;

/// Display color of a layer; layers past the palette reuse its last entry.
pub fn layer_color(idx: usize) -> Color {
    const COLORS: [Color; 4] = [Color::BLUE, Color::GREEN, Color::GREEN, Color::ORANGE];
    COLORS[idx.min(COLORS.len() - 1)]
}

/// Network drawn into a builder: neuron circles per layer and one line per neuron pair.
#[derive(Clone, Debug)]
pub struct DrawnNetwork {
    pub layout: NetworkLayout,
    pub layers: Vec<Layer>,
    pub connections: Vec<Connection>,
}

impl DrawnNetwork {
    /// Add neurons (grouped per layer) and the connection lines between adjacent layers.
    ///
    /// Nothing is shown yet; the caller animates layers and connections in.
    pub fn draw(b: &mut SceneBuilder, layout: NetworkLayout) -> ExplainerResult<Self> {
        let positions = layout.positions();

        let mut layers = Vec::with_capacity(positions.len());
        for (idx, column) in positions.iter().enumerate() {
            let color = layer_color(idx);
            let style = Style::stroked(color, 2.0).with_fill(color, 0.3);
            let mut neurons = Vec::with_capacity(column.len());
            for p in column {
                let id = b.circle(NEURON_RADIUS, style.clone());
                b.shift(id, p.to_vec2())?;
                neurons.push(id);
            }
            let group = b.group(neurons.iter().map(|n| Target::from(*n)))?;
            layers.push(Layer {
                neurons,
                group,
                color,
            });
        }

        let line_style = Style::stroked(Color::GRAY, 0.5).with_stroke_opacity(0.3);
        let connections = layout
            .connection_pairs()
            .into_iter()
            .map(|((l0, n0), (l1, n1))| {
                let line = b.line(positions[l0][n0], positions[l1][n1], line_style.clone());
                Connection {
                    from: layers[l0].neurons[n0],
                    to: layers[l1].neurons[n1],
                    line,
                }
            })
            .collect();

        tracing::debug!(
            layers = layers.len(),
            neurons = layout.neuron_count(),
            connections = layout.connection_count(),
            "network drawn"
        );
        Ok(Self {
            layout,
            layers,
            connections,
        })
    }
}

/// Title, network build-up, forward pass, prediction bars and closing line.
pub fn neural_network() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("NeuralNetworkScene");

    let title = b.text("How Neural Networks Process Data", 42.0, Color::WHITE);
    let subtitle = b.text("A Visual Journey", 28.0, Color::GRAY);
    b.next_to_default(subtitle, title, DOWN)?;
    b.play_for(1.5, [Animation::write(title)])?;
    b.play([Animation::fade_in_shift(subtitle, UP * 0.3)])?;
    b.wait(1.0)?;
    b.play([Animation::fade_out(title), Animation::fade_out(subtitle)])?;

    let net = DrawnNetwork::draw(&mut b, NetworkLayout::new(LAYER_SIZES)?)?;
    b.play_for(
        2.0,
        [Animation::lagged(
            0.3,
            net.layers.iter().map(|l| Animation::grow(l.group)),
        )],
    )?;
    b.wait(0.5)?;

    let mut labels = Vec::with_capacity(net.layers.len());
    for (layer, name) in net.layers.iter().zip(LAYER_NAMES) {
        let label = b.text(name, 20.0, layer.color);
        b.next_to(label, layer.group, DOWN, 0.5)?;
        labels.push(label);
    }
    b.play([Animation::lagged(
        0.2,
        labels.iter().map(|l| Animation::write(*l)),
    )])?;
    b.wait(1.0)?;

    b.play_for(
        2.0,
        [Animation::lagged(
            0.01,
            net.connections.iter().map(|c| Animation::create(c.line)),
        )],
    )?;
    b.wait(1.0)?;

    forward_pass(&mut b, &net)?;
    show_prediction(&mut b, &net)?;

    b.wait(1.0)?;
    let closing = b.text(
        "Neural networks learn by adjusting connection weights",
        28.0,
        Color::WHITE,
    );
    b.to_edge_default(closing, DOWN)?;
    b.play([Animation::write(closing)])?;
    b.wait(2.0)?;
    b.build()
}

fn forward_pass(b: &mut SceneBuilder, net: &DrawnNetwork) -> ExplainerResult<()> {
    let caption = b.text(
        "Forward Propagation: Data flows through the network",
        24.0,
        Color::WHITE,
    );
    b.to_edge_default(caption, UP)?;
    b.play([Animation::write(caption)])?;

    let input = &net.layers[0];
    let active = Style::stroked(Color::BLUE_A, 3.0).with_fill(Color::BLUE, 0.8);
    b.play([Animation::lagged(
        0.1,
        input
            .neurons
            .iter()
            .map(|n| Animation::restyle(*n, active.clone())),
    )])?;

    let positions = net.layout.positions();
    for (idx, pair) in positions.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        // Every signal leaves from the first neuron of the current layer.
        let signals: Vec<_> = next
            .iter()
            .map(|_| b.dot(current[0], 0.1, Color::YELLOW))
            .collect();
        for s in &signals {
            b.add(*s)?;
        }
        b.play_for(
            0.8,
            signals
                .iter()
                .zip(next)
                .map(|(s, p)| Animation::move_to(*s, *p)),
        )?;

        let layer = &net.layers[idx + 1];
        let active = Style::stroked(Color::WHITE, 3.0).with_fill(layer.color, 0.8);
        let mut anims = vec![Animation::lagged(
            0.05,
            layer
                .neurons
                .iter()
                .map(|n| Animation::restyle(*n, active.clone())),
        )];
        anims.extend(signals.iter().map(|s| Animation::fade_out(*s)));
        b.play_for(0.6, anims)?;
    }

    b.play([Animation::fade_out(caption)])?;
    Ok(())
}

fn show_prediction(b: &mut SceneBuilder, net: &DrawnNetwork) -> ExplainerResult<()> {
    let caption = b.text("Output: The network makes a prediction!", 28.0, Color::WHITE);
    b.to_edge_default(caption, UP)?;
    b.play([Animation::write(caption)])?;

    let Some(output) = net.layers.last() else {
        return Ok(());
    };
    for _ in 0..2 {
        b.play_for(
            0.5,
            [Animation::scale(output.group, 1.2).with_ease(Ease::ThereAndBack)],
        )?;
    }

    let mut bars = Vec::with_capacity(OUTPUTS.len());
    let mut names = Vec::with_capacity(OUTPUTS.len());
    for (neuron, (name, prob)) in output.neurons.iter().zip(OUTPUTS) {
        let bar = b.rect(prob * 2.0, 0.3, Style::filled(Color::ORANGE, 0.8));
        b.next_to(bar, *neuron, RIGHT, 0.3)?;
        b.align_to(bar, *neuron, LEFT)?;
        b.shift(bar, RIGHT * 0.5)?;

        let label = b.text(format!("{name}: {:.0}%", prob * 100.0), 18.0, Color::WHITE);
        b.next_to(label, bar, RIGHT, 0.2)?;
        bars.push(bar);
        names.push(label);
    }
    b.play([
        Animation::lagged(
            0.2,
            bars.iter().map(|bar| Animation::grow_from_edge(*bar, LEFT)),
        ),
        Animation::lagged(0.2, names.iter().map(|l| Animation::fade_in(*l))),
    ])?;

    let winner = b.text("Prediction: Dog!", 32.0, Color::GREEN);
    b.next_to_default(winner, caption, DOWN)?;
    b.play([Animation::write(winner)])?;
    b.wait(2.0)?;

    let mut chart: Vec<Target> = bars.iter().map(|id| Target::from(*id)).collect();
    chart.extend(names.iter().map(|id| Target::from(*id)));
    let chart = b.group(chart)?;
    b.play([
        Animation::fade_out(caption),
        Animation::fade_out(winner),
        Animation::fade_out(chart),
    ])
}

/// Minimal smoke scene: a circle and a caption.
pub fn hello() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("HelloScene");
    let circle = b.circle(2.0, Style::stroked(Color::BLUE, 4.0).with_fill(Color::BLUE, 0.5));
    let caption = b.text("Rendering is Working!", 36.0, Color::WHITE);
    b.next_to_default(caption, circle, DOWN)?;

    b.play([Animation::grow(circle)])?;
    b.play([Animation::write(caption)])?;
    b.play([Animation::set_color(circle, Color::GREEN)])?;
    b.play([
        Animation::scale(circle, 0.5),
        Animation::shift(caption, UP * 1.5),
    ])?;
    b.wait(1.0)?;
    b.build()
}

/// Axes of the gradient-descent plot.
pub fn descent_axes() -> ExplainerResult<Axes> {
    Ok(Axes::new((-3.0, 3.0, 1.0), (0.0, 10.0, 2.0), 8.0, 5.0)?.shifted(DOWN * 0.5))
}

/// A ball rolling down `x² + 1` one gradient step at a time.
pub fn gradient_descent() -> ExplainerResult<Scene> {
    gradient_descent_with(GradientDescent::default())
}

/// [`gradient_descent`] with custom optimizer settings.
pub fn gradient_descent_with(descent: GradientDescent) -> ExplainerResult<Scene> {
    descent.validate()?;
    let mut b = SceneBuilder::new("GradientDescentVisualization");

    let title = b.text("Gradient Descent: How Networks Learn", 36.0, Color::WHITE);
    b.play([Animation::write(title)])?;
    b.wait(1.0)?;
    let top = b.edge_target(title, UP, DEFAULT_EDGE_BUFF, 1.0)?;
    b.play([Animation::move_to(title, top), Animation::scale(title, 0.7)])?;

    let axes = descent_axes()?;
    let axes_group = b.axes(&axes, Color::GRAY)?;
    let curve = b.curve(
        &axes,
        GradientDescent::loss,
        -2.5,
        2.5,
        Style::stroked(Color::BLUE, 4.0),
    );
    let label = b.text("Loss Function", 24.0, Color::BLUE);
    b.next_to_default(label, curve, UP + RIGHT)?;
    b.play([
        Animation::create(axes_group),
        Animation::create(curve),
        Animation::write(label),
    ])?;
    b.wait(1.0)?;

    let on_curve = |x: f64| axes.coords_to_point(x, GradientDescent::loss(x));
    let ball = b.dot(on_curve(descent.x0), 0.15, Color::RED);
    b.add(ball)?;

    let explanation = b.text(
        "The ball (our model) rolls down to find the minimum loss",
        22.0,
        Color::WHITE,
    );
    b.to_edge_default(explanation, DOWN)?;
    b.play([Animation::write(explanation)])?;

    let mut x = descent.x0;
    for next in descent.trajectory() {
        let path: Vec<Point> = (0..=DESCENT_PATH_SAMPLES)
            .map(|i| on_curve(x + (next - x) * i as f64 / DESCENT_PATH_SAMPLES as f64))
            .collect();
        b.play_for(DESCENT_STEP_SECS, [Animation::move_along(ball, path)])?;
        x = next;
    }

    let success = b.text("Minimum Found! Model Trained!", 28.0, Color::GREEN);
    b.next_to_default(success, axes_group, DOWN)?;
    b.play([Animation::fade_out(explanation), Animation::write(success)])?;
    b.wait(2.0)?;
    b.build()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/neural.rs"]
mod tests;
