use ndarray::Array2;

/// Apply the 3x3 Laplacian kernel to a grid:
///   0  1  0
///   1 -4  1
///   0  1  0
///
/// The response has the same shape as the input. Samples outside the grid
/// are taken by reflect-101 mirroring (`dcb|abcd|cba`), so the border row
/// and column use their inner neighbour in place of the missing one.
/// All arithmetic is f64.
pub fn laplacian_response(data: &Array2<f32>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut result = Array2::<f64>::zeros((h, w));

    for row in 0..h {
        let up = reflect_101(row as isize - 1, h);
        let down = reflect_101(row as isize + 1, h);
        for col in 0..w {
            let left = reflect_101(col as isize - 1, w);
            let right = reflect_101(col as isize + 1, w);
            result[[row, col]] = -4.0 * data[[row, col]] as f64
                + data[[up, col]] as f64
                + data[[down, col]] as f64
                + data[[row, left]] as f64
                + data[[row, right]] as f64;
        }
    }

    result
}

/// Compute the Laplacian variance of a grid. Higher means sharper.
///
/// Returns the population variance of [`laplacian_response`]. An empty grid
/// scores 0.0; callers that need to reject it check the shape first.
pub fn laplacian_variance(data: &Array2<f32>) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let response = laplacian_response(data);
    let count = response.len() as f64;
    let mean = response.sum() / count;
    let sum_sq_dev: f64 = response.iter().map(|v| (v - mean) * (v - mean)).sum();

    sum_sq_dev / count
}

/// Mirror an out-of-range index back into `0..n` without repeating the edge.
fn reflect_101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    let reflected = if i < 0 {
        -i
    } else if i > last {
        2 * last - i
    } else {
        i
    };
    reflected as usize
}
