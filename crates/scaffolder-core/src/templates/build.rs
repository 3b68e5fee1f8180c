//! Static build configuration written to the project root
//!
//! None of these depend on the project name.

use super::TemplateFile;

pub const WEBPACK_COMMON: &str = r#"import { fileURLToPath } from 'url';
import { dirname } from 'path';
import path from 'path';

const __filename = fileURLToPath(import.meta.url);
const __dirname = dirname(__filename);

export default {
  entry: './src/index.js',
  output: {
    filename: 'bundle.js',
    path: path.resolve(__dirname, 'dist'),
  },
  module: {
    rules: [
      {
        test: /\.js$/,
        exclude: /node_modules/,
        use: {
          loader: 'babel-loader',
        },
      },
      {
        test: /\.css$/i,
        use: ['style-loader', 'css-loader'],
      },
      {
        test: /\.html$/i,
        loader: 'html-loader',
      },
      {
        test: /\.(png|svg|jpg|jpeg|gif)$/i,
        type: 'asset/resource',
      },
    ],
  },
};
"#;

pub const WEBPACK_DEV: &str = r#"import { merge } from 'webpack-merge';
import common from './webpack.common.js';
import HtmlWebpackPlugin from 'html-webpack-plugin';

export default merge(common, {
  mode: 'development',
  devtool: 'inline-source-map',
  devServer: {
    static: './dist',
    hot: true,
    watchFiles: ['./src/**/*'],
    liveReload: true,
  },
  plugins: [
    new HtmlWebpackPlugin({
      template: './src/template.html',
      filename: 'index.html',
    }),
  ],
});
"#;

pub const WEBPACK_PROD: &str = r#"import { merge } from 'webpack-merge';
import common from './webpack.common.js';
import TerserPlugin from 'terser-webpack-plugin';
import HtmlWebpackPlugin from 'html-webpack-plugin';

export default merge(common, {
  mode: 'production',
  optimization: {
    minimize: true,
    minimizer: [new TerserPlugin()],
  },
  plugins: [
    new HtmlWebpackPlugin({
      template: './src/template.html',
      minify: {
        collapseWhitespace: true,
        removeComments: true,
        removeRedundantAttributes: true,
        useShortDoctype: true,
        removeEmptyAttributes: true,
        removeStyleLinkTypeAttributes: true,
        keepClosingSlash: true,
        minifyJS: true,
        minifyCSS: true,
        minifyURLs: true,
      },
    }),
  ],
});
"#;

/// Native ESM without a transform step
pub const JEST_CONFIG: &str = r#"export default {
  testEnvironment: 'node',
  transform: {},
};
"#;

pub const GITIGNORE: &str = "node_modules/\ndist/\n";

/// Files written into the project root, in write order
pub fn build_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("webpack.common.js", WEBPACK_COMMON),
        TemplateFile::new("webpack.dev.js", WEBPACK_DEV),
        TemplateFile::new("webpack.prod.js", WEBPACK_PROD),
        TemplateFile::new("jest.config.js", JEST_CONFIG),
        TemplateFile::new(".gitignore", GITIGNORE),
    ]
}
