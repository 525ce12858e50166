// Tests for the network engine: forward trace shape, output error,
// backpropagation, classification, and the hand-computed single-step
// training fixture that pins down the exact update numerics.

use approx::assert_relative_eq;
use digit_nn::{Error, LayerTransition, Matrix, Network, Sample};

/// 3 inputs -> 2 hidden -> 1 output, with fixed weights.
fn fixture_network() -> Network {
    let transitions = vec![LayerTransition::new(3, 2), LayerTransition::new(2, 1)];
    let weights = vec![
        Matrix::from_rows(vec![vec![0.5, -0.25, 0.1], vec![0.2, 0.3, -0.4]]).unwrap(),
        Matrix::from_rows(vec![vec![0.7, -0.6]]).unwrap(),
    ];
    Network::new(transitions, weights).unwrap()
}

fn fixture_sample() -> Sample {
    Sample::new(vec![0.2, 0.8, 0.5], 0)
}

#[test]
fn construction_checks_weight_shapes_against_transitions() {
    let transitions = vec![LayerTransition::new(3, 2)];
    let wrong = vec![Matrix::zeros(3, 2)];
    assert!(matches!(
        Network::new(transitions, wrong),
        Err(Error::ShapeMismatch { .. })
    ));

    let transitions = vec![LayerTransition::new(3, 2)];
    assert!(matches!(
        Network::new(transitions, vec![]),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn forward_trace_has_one_entry_per_layer() {
    let network = fixture_network();
    let trace = network.forward(&fixture_sample()).unwrap();

    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].rows(), 3);
    assert_eq!(trace[1].rows(), 2);
    assert_eq!(trace[2].rows(), 1);
    for layer in &trace {
        assert!(layer.is_column());
    }
}

#[test]
fn forward_applies_sigmoid_to_the_input_layer() {
    let network = fixture_network();
    let trace = network.forward(&fixture_sample()).unwrap();

    assert_relative_eq!(trace[0].get(0, 0), 0.549833997312478, epsilon = 1e-12);
    assert_relative_eq!(trace[0].get(1, 0), 0.6899744811276125, epsilon = 1e-12);
    assert_relative_eq!(trace[0].get(2, 0), 0.6224593312018546, epsilon = 1e-12);
}

#[test]
fn output_error_is_one_hot_minus_activation() {
    let network = fixture_network();
    let sample = fixture_sample();
    let trace = network.forward(&sample).unwrap();

    let error = network.output_error(&sample, &trace[2]).unwrap();
    assert_eq!(error.rows(), 1);
    assert_relative_eq!(error.get(0, 0), 0.4828667603398954, epsilon = 1e-12);
}

#[test]
fn output_error_rejects_out_of_range_labels() {
    let network = fixture_network();
    let sample = Sample::new(vec![0.2, 0.8, 0.5], 5);
    let trace = network.forward(&sample).unwrap();

    let err = network.output_error(&sample, &trace[2]).unwrap_err();
    assert!(matches!(
        err,
        Error::LabelOutOfRange {
            label: 5,
            output_size: 1
        }
    ));
}

#[test]
fn backpropagate_attributes_an_error_to_every_layer() {
    let network = fixture_network();
    let sample = fixture_sample();
    let trace = network.forward(&sample).unwrap();
    let errors = network.backpropagate(&sample, &trace).unwrap();

    assert_eq!(errors.len(), trace.len());

    // Output layer error, then transposed-weight propagation only; the
    // sigmoid-derivative factor belongs to the update step, not here.
    assert_relative_eq!(errors[2].get(0, 0), 0.4828667603398954, epsilon = 1e-12);
    assert_relative_eq!(errors[1].get(0, 0), 0.33800673223792677, epsilon = 1e-12);
    assert_relative_eq!(errors[1].get(1, 0), -0.2897200562039372, epsilon = 1e-12);
    assert_relative_eq!(errors[0].get(0, 0), 0.11105935487817595, epsilon = 1e-12);
    assert_relative_eq!(errors[0].get(1, 0), -0.17141769992066286, epsilon = 1e-12);
    assert_relative_eq!(errors[0].get(2, 0), 0.14968869570536755, epsilon = 1e-12);
}

#[test]
fn one_training_step_reproduces_the_hand_computed_weights() {
    let mut network = fixture_network();
    let sample = fixture_sample();

    let trace = network.forward(&sample).unwrap();
    let errors = network.backpropagate(&sample, &trace).unwrap();
    network.update_weights(&trace, &errors, 0.5).unwrap();

    let expected_w0 = [
        [0.5230741755789867, -0.22104472913574516, 0.1261219494777215],
        [0.18011074212999026, 0.27504141168798213, -0.4225163489569228],
    ];
    let expected_w1 = [[0.7326200175098185, -0.5688321414825381]];

    let w0 = &network.weights()[0];
    for i in 0..2 {
        for j in 0..3 {
            assert_relative_eq!(w0.get(i, j), expected_w0[i][j], epsilon = 1e-12);
        }
    }

    let w1 = &network.weights()[1];
    for j in 0..2 {
        assert_relative_eq!(w1.get(0, j), expected_w1[0][j], epsilon = 1e-12);
    }
}

#[test]
fn update_weights_rejects_a_trace_of_the_wrong_length() {
    let mut network = fixture_network();
    let sample = fixture_sample();
    let trace = network.forward(&sample).unwrap();
    let errors = network.backpropagate(&sample, &trace).unwrap();

    let short = &trace[..2];
    assert!(matches!(
        network.update_weights(short, &errors, 0.5),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn classify_returns_an_output_layer_index() {
    let network = fixture_network();
    let predicted = network.classify(&fixture_sample()).unwrap();
    assert!(predicted < 1);
}

#[test]
fn classify_breaks_ties_toward_the_lowest_index() {
    // All-zero weights force every output activation to sigmoid(0) = 0.5.
    let transitions = vec![LayerTransition::new(2, 3)];
    let weights = vec![Matrix::zeros(3, 2)];
    let network = Network::new(transitions, weights).unwrap();

    let sample = Sample::new(vec![0.4, 0.9], 0);
    assert_eq!(network.classify(&sample).unwrap(), 0);
}

#[test]
fn forward_surfaces_unchained_transitions_as_shape_mismatch() {
    // output 2 feeding a transition that expects 4 inputs.
    let transitions = vec![LayerTransition::new(3, 2), LayerTransition::new(4, 1)];
    let weights = vec![Matrix::zeros(2, 3), Matrix::zeros(1, 4)];
    let network = Network::new(transitions, weights).unwrap();

    let err = network.forward(&fixture_sample()).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn xavier_network_matches_its_transitions() {
    let transitions = vec![LayerTransition::new(784, 81), LayerTransition::new(81, 10)];
    let network = Network::xavier(transitions);

    assert_eq!(network.weights().len(), 2);
    assert_eq!(network.weights()[0].rows(), 81);
    assert_eq!(network.weights()[0].cols(), 784);
    assert_eq!(network.weights()[1].rows(), 10);
    assert_eq!(network.weights()[1].cols(), 81);
}
